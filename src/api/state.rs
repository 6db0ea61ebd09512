//! Application state for the HR payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::Database;
use crate::workflow::TransitionPolicy;

/// Shared application state.
///
/// Holds the explicitly constructed database handle and the status
/// transition policy chosen at startup.
#[derive(Clone)]
pub struct AppState {
    /// The document store.
    db: Arc<Database>,
    /// Whether status changes are checked against the workflow tables.
    policy: TransitionPolicy,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(db: Database, policy: TransitionPolicy) -> Self {
        Self {
            db: Arc::new(db),
            policy,
        }
    }

    /// Returns the database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Returns the status transition policy.
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_database() {
        let state = AppState::new(Database::in_memory(), TransitionPolicy::GUARDED);
        let clone = state.clone();
        assert!(std::ptr::eq(state.db(), clone.db()));
        assert!(clone.policy().is_enforced());
    }
}
