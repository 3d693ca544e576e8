//! Rule evaluation.
//!
//! Evaluation algorithm:
//!
//! 1. Walk `RULES` in order.
//! 2. The first matching hard block rejects immediately with its reason.
//! 3. Every matching `Require` rule appends its reason and modification.
//! 4. Any modification ⇒ `modify`; none ⇒ `allow` with `["policy-compliant"]`.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use ethgate_contracts::{
    action::Action,
    decision::Decision,
    error::EthgateResult,
    policy::Policy,
};
use ethgate_core::traits::PolicyEngine;

use crate::{
    loader::{load_document, parse_json, parse_toml},
    rule::{RuleEffect, RULES},
};

/// Classify `action` against `policy`.
///
/// Pure and total: no I/O, no failure, same inputs give the same decision.
pub fn evaluate(action: &Action, policy: &Policy) -> Decision {
    let mut reasons = Vec::new();
    let mut modifications = Vec::new();

    for rule in RULES {
        let Some(reason) = rule.check(action, policy) else {
            continue;
        };

        debug!(rule_id = rule.id, kind = %action.kind, reason = %reason, "rule fired");

        match rule.effect {
            RuleEffect::HardBlock => return Decision::reject(reason),
            RuleEffect::Require { modification } => {
                reasons.push(reason);
                modifications.push(modification.to_string());
            }
        }
    }

    Decision::modify(reasons, modifications)
}

/// A `PolicyEngine` bound to one policy document.
///
/// ```rust,ignore
/// use ethgate_policy::RuleEngine;
///
/// let engine = RuleEngine::from_file(Path::new("policy.json"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    policy: Policy,
}

impl RuleEngine {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Build from an already-parsed policy document.
    pub fn from_value(value: &Value) -> Self {
        Self::new(Policy::from_value(value))
    }

    /// Parse `s` as a JSON policy document.
    pub fn from_json_str(s: &str) -> EthgateResult<Self> {
        Ok(Self::from_value(&parse_json("<inline>", s)?))
    }

    /// Parse `s` as a TOML policy document.
    pub fn from_toml_str(s: &str) -> EthgateResult<Self> {
        Ok(Self::from_value(&parse_toml("<inline>", s)?))
    }

    /// Load the policy at `path`. A missing file yields the empty policy.
    pub fn from_file(path: &Path) -> EthgateResult<Self> {
        Ok(Self::from_value(&load_document(path)?))
    }

    /// The effective policy, with all defaults applied.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl PolicyEngine for RuleEngine {
    fn evaluate(&self, action: &Action) -> Decision {
        evaluate(action, &self.policy)
    }
}
