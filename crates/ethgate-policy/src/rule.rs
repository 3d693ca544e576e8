//! The ordered rule table.
//!
//! Each rule pairs a condition with the reason it reports and the effect it
//! has. `RULES` is evaluated top to bottom; that order is the order reasons
//! and modifications appear in the decision.

use std::collections::BTreeSet;

use tracing::debug;

use ethgate_contracts::{action::Action, policy::Policy};

/// What happens when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    /// Reject the action and stop evaluating.
    HardBlock,
    /// Let the action proceed only after `modification` is applied.
    Require { modification: &'static str },
}

/// A single policy rule.
pub struct Rule {
    /// Stable identifier used in logs.
    pub id: &'static str,
    pub effect: RuleEffect,
    condition: fn(&Action, &Policy) -> Option<String>,
}

impl Rule {
    /// Return the reason this rule reports, or `None` if it does not match.
    pub fn check(&self, action: &Action, policy: &Policy) -> Option<String> {
        (self.condition)(action, policy)
    }
}

/// All rules in evaluation order. Hard blocks come first.
pub const RULES: &[Rule] = &[
    Rule {
        id: "hard-block-tag",
        effect: RuleEffect::HardBlock,
        condition: hard_block_tag,
    },
    Rule {
        id: "hard-block-kind",
        effect: RuleEffect::HardBlock,
        condition: hard_block_kind,
    },
    Rule {
        id: "external-requires-approval",
        effect: RuleEffect::Require {
            modification: "request explicit approval before execution",
        },
        condition: external_without_approval,
    },
    Rule {
        id: "redact-tags",
        effect: RuleEffect::Require {
            modification: "redact sensitive content before execution",
        },
        condition: redact_tags,
    },
    Rule {
        id: "review-kinds",
        effect: RuleEffect::Require {
            modification: "route for human review",
        },
        condition: review_kind,
    },
];

fn hard_block_tag(action: &Action, policy: &Policy) -> Option<String> {
    matched_tags(&action.risk_tags, &policy.hard_blocks.blocked_tags, "hard-block-tag")
        .then(|| "matches hard-block tag".to_string())
}

fn hard_block_kind(action: &Action, policy: &Policy) -> Option<String> {
    policy
        .hard_blocks
        .blocked_kinds
        .contains(&action.kind)
        .then(|| format!("action kind '{}' is hard-blocked", action.kind))
}

fn external_without_approval(action: &Action, policy: &Policy) -> Option<String> {
    (action.external
        && policy.context_rules.external_requires_approval
        && !action.has_explicit_approval)
        .then(|| "external action without explicit approval".to_string())
}

fn redact_tags(action: &Action, policy: &Policy) -> Option<String> {
    matched_tags(&action.risk_tags, &policy.soft_constraints.redact_tags, "redact-tags")
        .then(|| "contains tags requiring redaction".to_string())
}

fn review_kind(action: &Action, policy: &Policy) -> Option<String> {
    policy
        .soft_constraints
        .review_kinds
        .contains(&action.kind)
        .then(|| format!("kind '{}' requires human review", action.kind))
}

/// True if the two tag sets intersect. The matched tags are logged but not
/// reported in the reason.
fn matched_tags(tags: &BTreeSet<String>, listed: &BTreeSet<String>, rule_id: &str) -> bool {
    let matched: Vec<&str> = tags.intersection(listed).map(String::as_str).collect();
    if matched.is_empty() {
        return false;
    }
    debug!(rule_id, tags = ?matched, "tag rule matched");
    true
}
