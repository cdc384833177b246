//! Domain value objects

use serde::Serialize;

/// Outcome of a login admission check
///
/// There are exactly two decision states, computed fresh on every call
/// from the timestamps currently inside the window. No persistent
/// "banned" state exists beyond what the window implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionDecision {
    /// Attempt admitted and recorded
    Allow,
    /// Attempt over the window ceiling; not recorded
    Reject,
}

impl AdmissionDecision {
    /// True when the attempt was admitted
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// True when the attempt was rejected
    pub fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}
