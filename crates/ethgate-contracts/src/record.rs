//! The decision record written for every evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decision::{Decision, Verdict};

/// Unique identifier for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(pub uuid::Uuid);

impl EvaluationId {
    /// Create a new, unique evaluation ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

/// The auditable result document for one evaluation.
///
/// Records are immutable once sealed: `digest` commits to every other field,
/// so any later edit is detectable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub evaluation_id: EvaluationId,
    /// Wall-clock time the decision was made (UTC).
    pub timestamp: DateTime<Utc>,
    pub decision: Verdict,
    pub reasons: Vec<String>,
    pub modifications: Vec<String>,
    /// The submitted action document, unmodified.
    pub action: Value,
    /// SHA-256 hex over the fields above. Empty until sealed.
    #[serde(default)]
    pub digest: String,
}

impl DecisionRecord {
    /// Build an unsealed record from a decision and the raw action.
    pub fn new(
        evaluation_id: EvaluationId,
        timestamp: DateTime<Utc>,
        decision: Decision,
        action: Value,
    ) -> Self {
        Self {
            evaluation_id,
            timestamp,
            decision: decision.decision,
            reasons: decision.reasons,
            modifications: decision.modifications,
            action,
            digest: String::new(),
        }
    }

    /// True once a digest has been attached.
    pub fn is_sealed(&self) -> bool {
        !self.digest.is_empty()
    }
}
