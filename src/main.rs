//! HR payroll service binary.
//!
//! Usage:
//!   hr-payroll --config ./config/service.yaml
//!   hr-payroll --port 8080            # defaults for everything else

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hr_payroll::api::{create_router, AppState};
use hr_payroll::config::{ConfigLoader, LoggingConfig};
use hr_payroll::store::Database;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "hr-payroll", version, about = "HR and payroll records service")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long, env = "HR_PAYROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration file.
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for collection snapshots, overriding the configuration file.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter.as_str()));
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut loader = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    };
    if let Some(port) = args.port {
        loader.config_mut().server.port = port;
    }
    if let Some(dir) = args.data_dir {
        loader.config_mut().storage.data_dir = Some(dir);
    }
    let config = loader.config();

    init_tracing(&config.logging);
    info!(
        config = ?args.config,
        enforce_transitions = config.workflow.enforce_transitions,
        "Starting HR payroll service"
    );

    let db = Database::connect(&config.storage).await?;
    let state = AppState::new(db, loader.transition_policy());
    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
