//! Connection diagnostic endpoint.

use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use crate::store::{Backend, CollectionStats};

use super::super::response::{ok, ApiResult};
use super::super::state::AppState;

/// Body of a successful `GET /api/test-db`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    /// Always "connected"; failures never reach this handler.
    pub message: &'static str,
    /// Where documents are kept.
    pub backend: Backend,
    /// Whether status changes are guarded by the workflow tables.
    pub enforce_transitions: bool,
    /// Per-collection document counts.
    pub collections: Vec<CollectionStats>,
}

/// GET /api/test-db
pub(super) async fn test_db(State(state): State<AppState>) -> ApiResult<DatabaseStatus> {
    let collections = state.db().stats().await;
    debug!(collections = collections.len(), "Database diagnostic");
    ok(DatabaseStatus {
        message: "connected",
        backend: state.db().backend(),
        enforce_transitions: state.policy().is_enforced(),
        collections,
    })
}
