//! The ethgate gate: evaluate, stamp, record.
//!
//!   ActionDocument → PolicyEngine::evaluate → DecisionRecord → AuditWriter::write
//!
//! A decision is only returned to the caller once the audit writer has
//! accepted it.

use chrono::Utc;
use tracing::{debug, info, warn};

use ethgate_contracts::{
    action::ActionDocument,
    decision::Verdict,
    error::EthgateResult,
    record::{DecisionRecord, EvaluationId},
};

use crate::traits::{AuditWriter, PolicyEngine};

/// Drives one or more evaluations through a policy engine and audit writer.
pub struct Gate {
    engine: Box<dyn PolicyEngine>,
    audit: Box<dyn AuditWriter>,
}

impl Gate {
    pub fn new(engine: Box<dyn PolicyEngine>, audit: Box<dyn AuditWriter>) -> Self {
        Self { engine, audit }
    }

    /// Evaluate one action and persist the resulting record.
    ///
    /// # Errors
    ///
    /// Only audit failures are errors. `reject` and `modify` are ordinary
    /// outcomes carried in the returned record.
    pub fn check(&self, document: ActionDocument) -> EthgateResult<DecisionRecord> {
        let evaluation_id = EvaluationId::new();

        debug!(
            evaluation_id = %evaluation_id.0,
            kind = %document.action.kind,
            external = document.action.external,
            tag_count = document.action.risk_tags.len(),
            "evaluating action"
        );

        let decision = self.engine.evaluate(&document.action);

        match decision.decision {
            Verdict::Reject => warn!(
                evaluation_id = %evaluation_id.0,
                kind = %document.action.kind,
                reason = %decision.reasons.join("; "),
                "action rejected"
            ),
            Verdict::Modify => info!(
                evaluation_id = %evaluation_id.0,
                kind = %document.action.kind,
                modifications = decision.modifications.len(),
                "action requires modification"
            ),
            Verdict::Allow => debug!(
                evaluation_id = %evaluation_id.0,
                kind = %document.action.kind,
                "action allowed"
            ),
        }

        let record = DecisionRecord::new(evaluation_id, Utc::now(), decision, document.raw);
        self.audit.write(record)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
