//! The database handle holding one collection per record type.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::StorageConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    Approval, Claim, ClearanceChecklist, Contract, Interview, Irregularity, Offer, PayrollRun,
    Payslip, Refund, SigningBonus, Termination,
};

use super::collection::Collection;

/// Where the collections keep their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process memory only; lost on restart.
    Memory,
    /// JSON snapshot files in a data directory.
    File,
}

/// Document count for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    /// Collection name.
    pub name: &'static str,
    /// Number of stored documents.
    pub count: usize,
}

/// Explicitly constructed database handle.
///
/// Built once at startup and shared with handlers through
/// [`AppState`](crate::api::AppState).
pub struct Database {
    backend: Backend,
    /// Interview records.
    pub interviews: Collection<Interview>,
    /// Offer records.
    pub offers: Collection<Offer>,
    /// Contract records.
    pub contracts: Collection<Contract>,
    /// Termination records.
    pub terminations: Collection<Termination>,
    /// Clearance checklist records.
    pub clearance_checklists: Collection<ClearanceChecklist>,
    /// Expense claim records.
    pub claims: Collection<Claim>,
    /// Refund records.
    pub refunds: Collection<Refund>,
    /// Signing bonus records.
    pub signing_bonuses: Collection<SigningBonus>,
    /// Payroll run approval records.
    pub approvals: Collection<Approval>,
    /// Payroll run records.
    pub payroll_runs: Collection<PayrollRun>,
    /// Payslip records.
    pub payslips: Collection<Payslip>,
    /// Payroll irregularity records.
    pub irregularities: Collection<Irregularity>,
}

impl Database {
    /// Creates an empty database that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory,
            interviews: Collection::in_memory(),
            offers: Collection::in_memory(),
            contracts: Collection::in_memory(),
            terminations: Collection::in_memory(),
            clearance_checklists: Collection::in_memory(),
            claims: Collection::in_memory(),
            refunds: Collection::in_memory(),
            signing_bonuses: Collection::in_memory(),
            approvals: Collection::in_memory(),
            payroll_runs: Collection::in_memory(),
            payslips: Collection::in_memory(),
            irregularities: Collection::in_memory(),
        }
    }

    /// Opens every collection from snapshot files under `dir`, creating the
    /// directory if needed.
    pub async fn open_dir(dir: &Path) -> ServiceResult<Self> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| ServiceError::Storage {
                collection: "*".to_string(),
                message: format!("cannot create data directory {}: {}", dir.display(), e),
            })?;

        let database = Self {
            backend: Backend::File,
            interviews: Collection::open(dir).await?,
            offers: Collection::open(dir).await?,
            contracts: Collection::open(dir).await?,
            terminations: Collection::open(dir).await?,
            clearance_checklists: Collection::open(dir).await?,
            claims: Collection::open(dir).await?,
            refunds: Collection::open(dir).await?,
            signing_bonuses: Collection::open(dir).await?,
            approvals: Collection::open(dir).await?,
            payroll_runs: Collection::open(dir).await?,
            payslips: Collection::open(dir).await?,
            irregularities: Collection::open(dir).await?,
        };
        info!(data_dir = %dir.display(), "Opened file-backed database");
        Ok(database)
    }

    /// Opens the database described by the storage configuration.
    pub async fn connect(config: &StorageConfig) -> ServiceResult<Self> {
        match &config.data_dir {
            Some(dir) => Self::open_dir(dir).await,
            None => {
                info!("Using in-memory database");
                Ok(Self::in_memory())
            }
        }
    }

    /// Where the data lives.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Document counts per collection, in a fixed order.
    pub async fn stats(&self) -> Vec<CollectionStats> {
        macro_rules! stats {
            ($($field:ident),* $(,)?) => {
                vec![$(CollectionStats {
                    name: self.$field.name(),
                    count: self.$field.count().await,
                }),*]
            };
        }
        stats![
            interviews,
            offers,
            contracts,
            terminations,
            clearance_checklists,
            claims,
            refunds,
            signing_bonuses,
            approvals,
            payroll_runs,
            payslips,
            irregularities,
        ]
    }
}
