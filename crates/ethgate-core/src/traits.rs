//! Trait seams of the ethgate pipeline.
//!
//! - `PolicyEngine` — trusted, pure classifier of a single action
//! - `AuditWriter`  — trusted sink that seals and persists every decision
//!
//! The gate wires them together. Neither trait knows about the other.

use ethgate_contracts::{
    action::Action, decision::Decision, error::EthgateResult, record::DecisionRecord,
};

/// Classifies an action against a policy.
///
/// Implementations must be deterministic and free of side effects: the same
/// action always yields the same decision, and evaluation never fails.
pub trait PolicyEngine: Send + Sync {
    /// Decide whether `action` may proceed, must be modified, or is rejected.
    fn evaluate(&self, action: &Action) -> Decision;
}

/// Persists decision records.
///
/// A failed write is fatal: the gate does not hand back a decision that has
/// not been recorded.
pub trait AuditWriter: Send + Sync {
    /// Seal `record` and persist it, returning the record as written.
    fn write(&self, record: DecisionRecord) -> EthgateResult<DecisionRecord>;
}
