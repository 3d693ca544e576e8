//! # ethgate-contracts
//!
//! Shared types for the ethgate policy gate.
//!
//! All crates in the workspace import from here. The only logic in this
//! crate is the defaulting applied when raw documents are turned into typed
//! `Action` and `Policy` values.

pub mod action;
pub mod decision;
pub mod error;
pub mod policy;
pub mod record;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use action::{Action, ActionDocument};
    use decision::{Decision, Verdict};
    use error::EthgateError;
    use policy::Policy;
    use record::{DecisionRecord, EvaluationId};

    // ── Action defaults ──────────────────────────────────────────────────────

    #[test]
    fn action_empty_document_uses_defaults() {
        let action = Action::from_value(&json!({}));
        assert_eq!(action, Action::default());
        assert_eq!(action.kind, "internal");
        assert!(action.risk_tags.is_empty());
        assert!(!action.external);
        assert!(!action.has_explicit_approval);
    }

    #[test]
    fn action_reads_all_fields() {
        let action = Action::from_value(&json!({
            "kind": "post",
            "risk_tags": ["pii", "financial", "pii"],
            "external": true,
            "has_explicit_approval": true
        }));
        assert_eq!(action.kind, "post");
        assert_eq!(action.risk_tags.len(), 2);
        assert!(action.risk_tags.contains("pii"));
        assert!(action.risk_tags.contains("financial"));
        assert!(action.external);
        assert!(action.has_explicit_approval);
    }

    #[test]
    fn action_malformed_fields_degrade_to_defaults() {
        let action = Action::from_value(&json!({
            "kind": 42,
            "risk_tags": "pii",
            "external": "yes",
            "has_explicit_approval": null
        }));
        assert_eq!(action, Action::default());
    }

    #[test]
    fn action_skips_non_string_tags() {
        let action = Action::from_value(&json!({ "risk_tags": ["pii", 7, null, "legal"] }));
        let tags: Vec<&str> = action.risk_tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["legal", "pii"]);
    }

    #[test]
    fn action_document_keeps_raw_verbatim() {
        let raw = json!({ "kind": "email", "to": "ops@example.com", "priority": 3 });
        let doc = ActionDocument::new(raw.clone());
        assert_eq!(doc.raw, raw);
        assert_eq!(doc.action.kind, "email");
    }

    // ── Policy defaults ──────────────────────────────────────────────────────

    #[test]
    fn policy_empty_document_uses_defaults() {
        let policy = Policy::from_value(&json!({}));
        assert_eq!(policy, Policy::default());
        assert!(policy.hard_blocks.blocked_tags.is_empty());
        assert!(policy.soft_constraints.review_kinds.is_empty());
        assert!(policy.context_rules.external_requires_approval);
    }

    #[test]
    fn policy_reads_all_sections() {
        let policy = Policy::from_value(&json!({
            "hard_blocks": { "blocked_tags": ["weapons"], "blocked_kinds": ["delete"] },
            "soft_constraints": { "redact_tags": ["pii"], "review_kinds": ["payment"] },
            "context_rules": { "external_requires_approval": false }
        }));
        assert!(policy.hard_blocks.blocked_tags.contains("weapons"));
        assert!(policy.hard_blocks.blocked_kinds.contains("delete"));
        assert!(policy.soft_constraints.redact_tags.contains("pii"));
        assert!(policy.soft_constraints.review_kinds.contains("payment"));
        assert!(!policy.context_rules.external_requires_approval);
    }

    #[test]
    fn policy_malformed_approval_flag_keeps_default() {
        let policy = Policy::from_value(&json!({
            "context_rules": { "external_requires_approval": "no" },
            "hard_blocks": []
        }));
        assert!(policy.context_rules.external_requires_approval);
        assert!(policy.hard_blocks.blocked_kinds.is_empty());
    }

    /// An explicit null is treated like an absent flag.
    #[test]
    fn policy_null_approval_flag_keeps_default() {
        let policy = Policy::from_value(&json!({
            "context_rules": { "external_requires_approval": null }
        }));
        assert!(policy.context_rules.external_requires_approval);
    }

    // ── Decision constructors ────────────────────────────────────────────────

    #[test]
    fn decision_allow_has_fixed_reason() {
        let d = Decision::allow();
        assert_eq!(d.decision, Verdict::Allow);
        assert_eq!(d.reasons, vec!["policy-compliant".to_string()]);
        assert!(d.modifications.is_empty());
    }

    #[test]
    fn decision_modify_without_modifications_is_allow() {
        let d = Decision::modify(vec!["stray".to_string()], Vec::new());
        assert_eq!(d, Decision::allow());
    }

    #[test]
    fn decision_reject_has_no_modifications() {
        let d = Decision::reject("matches hard-block tag");
        assert_eq!(d.decision, Verdict::Reject);
        assert_eq!(d.reasons, vec!["matches hard-block tag".to_string()]);
        assert!(d.modifications.is_empty());
    }

    #[test]
    fn verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Allow).unwrap(), "\"allow\"");
        assert_eq!(serde_json::to_string(&Verdict::Modify).unwrap(), "\"modify\"");
        assert_eq!(serde_json::to_string(&Verdict::Reject).unwrap(), "\"reject\"");
        assert_eq!(Verdict::Reject.to_string(), "reject");
    }

    // ── DecisionRecord ───────────────────────────────────────────────────────

    #[test]
    fn record_serializes_expected_fields() {
        let record = DecisionRecord::new(
            EvaluationId::new(),
            chrono::Utc::now(),
            Decision::allow(),
            json!({ "kind": "email" }),
        );
        assert!(!record.is_sealed());

        let value = serde_json::to_value(&record).unwrap();
        for field in [
            "evaluation_id",
            "timestamp",
            "decision",
            "reasons",
            "modifications",
            "action",
            "digest",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["decision"], "allow");
        assert_eq!(value["action"], json!({ "kind": "email" }));
    }

    #[test]
    fn evaluation_id_new_produces_unique_values() {
        let unique: std::collections::HashSet<String> =
            (0..100).map(|_| EvaluationId::new().0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── EthgateError display messages ────────────────────────────────────────

    #[test]
    fn error_malformed_document_display() {
        let err = EthgateError::MalformedDocument {
            path: "action.json".to_string(),
            reason: "expected value at line 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed document"));
        assert!(msg.contains("action.json"));
    }

    #[test]
    fn error_audit_write_failed_display() {
        let err = EthgateError::AuditWriteFailed {
            reason: "disk full".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("audit write failed"));
        assert!(msg.contains("disk full"));
    }
}
