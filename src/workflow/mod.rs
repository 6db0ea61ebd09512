//! Status workflows shared by every record type with a closed status set.
//!
//! A workflow is a closed set of string values plus a transition table. The
//! [`ClosedSet`] trait covers parsing and rendering the values, and
//! [`StatusWorkflow`] adds the table used by [`transition`] to guard status
//! changes.

use std::fmt;

use crate::error::{ServiceError, ServiceResult};

/// A closed set of string values, such as a status or a role.
pub trait ClosedSet: Copy + Eq + fmt::Debug + Sized + 'static {
    /// Every member of the set, in declaration order.
    const ALL: &'static [Self];

    /// The field name reported when an unknown value is rejected.
    const FIELD: &'static str = "status";

    /// The wire representation of this value.
    fn as_str(self) -> &'static str;

    /// Parses a wire value, rejecting anything outside the set.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::models::OfferStatus;
    /// use hr_payroll::workflow::ClosedSet;
    ///
    /// assert_eq!(OfferStatus::parse("Sent").unwrap(), OfferStatus::Sent);
    /// assert!(OfferStatus::parse("sent").is_err());
    /// ```
    fn parse(value: &str) -> ServiceResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == value)
            .ok_or_else(|| ServiceError::InvalidStatus {
                field: Self::FIELD.to_string(),
                value: value.to_string(),
                allowed: Self::ALL
                    .iter()
                    .map(|member| member.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// A status set with an explicit transition table.
pub trait StatusWorkflow: ClosedSet {
    /// The states reachable in one step from `self`.
    fn successors(self) -> &'static [Self];

    /// Returns true if `next` may follow `self`.
    ///
    /// Staying in the same state is always allowed.
    fn can_transition_to(self, next: Self) -> bool {
        self == next || self.successors().contains(&next)
    }

    /// Returns true if no other state is reachable from `self`.
    fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

/// Whether status changes are checked against the transition tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPolicy {
    enforce: bool,
}

impl TransitionPolicy {
    /// Every change must follow the workflow table.
    pub const GUARDED: Self = Self { enforce: true };

    /// Any in-set value may replace any other.
    pub const UNGUARDED: Self = Self { enforce: false };

    /// Creates a policy from the configuration flag.
    pub fn new(enforce: bool) -> Self {
        Self { enforce }
    }

    /// Returns true if the transition tables are enforced.
    pub fn is_enforced(self) -> bool {
        self.enforce
    }
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::GUARDED
    }
}

/// Validates a status change for `resource` and returns the new status.
///
/// # Example
///
/// ```
/// use hr_payroll::models::PayrollRunStatus;
/// use hr_payroll::workflow::{transition, TransitionPolicy};
///
/// let next = transition(
///     "PayrollRun",
///     PayrollRunStatus::Draft,
///     PayrollRunStatus::Previewed,
///     TransitionPolicy::GUARDED,
/// )
/// .unwrap();
/// assert_eq!(next, PayrollRunStatus::Previewed);
///
/// assert!(transition(
///     "PayrollRun",
///     PayrollRunStatus::Draft,
///     PayrollRunStatus::Locked,
///     TransitionPolicy::GUARDED,
/// )
/// .is_err());
/// ```
pub fn transition<S: StatusWorkflow>(
    resource: &str,
    current: S,
    next: S,
    policy: TransitionPolicy,
) -> ServiceResult<S> {
    if policy.is_enforced() && !current.can_transition_to(next) {
        return Err(ServiceError::InvalidTransition {
            resource: resource.to_string(),
            from: current.as_str().to_string(),
            to: next.as_str().to_string(),
        });
    }
    Ok(next)
}

/// Parses `value` and validates the change from `current` in one step.
pub fn transition_str<S: StatusWorkflow>(
    resource: &str,
    current: S,
    value: &str,
    policy: TransitionPolicy,
) -> ServiceResult<S> {
    let next = S::parse(value)?;
    transition(resource, current, next, policy)
}
