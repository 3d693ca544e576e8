//! Decision types produced by the evaluator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The sole reason reported for an `allow` decision.
pub const POLICY_COMPLIANT: &str = "policy-compliant";

/// The classification of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The action may proceed unchanged.
    Allow,
    /// The action may proceed only after the listed modifications.
    Modify,
    /// The action must not proceed.
    Reject,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Modify => "modify",
            Verdict::Reject => "reject",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one evaluation.
///
/// `reasons` and `modifications` are in rule-firing order. Construct through
/// `allow`, `reject`, or `modify` so the verdict always agrees with the lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub decision: Verdict,
    pub reasons: Vec<String>,
    pub modifications: Vec<String>,
}

impl Decision {
    /// `allow` with the fixed `["policy-compliant"]` reason list.
    pub fn allow() -> Self {
        Self {
            decision: Verdict::Allow,
            reasons: vec![POLICY_COMPLIANT.to_string()],
            modifications: Vec::new(),
        }
    }

    /// `reject` carrying the single hard-block reason that fired.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            decision: Verdict::Reject,
            reasons: vec![reason.into()],
            modifications: Vec::new(),
        }
    }

    /// `modify` when any modification is required, otherwise `allow`.
    ///
    /// Accumulated reasons are discarded in the `allow` case.
    pub fn modify(reasons: Vec<String>, modifications: Vec<String>) -> Self {
        if modifications.is_empty() {
            return Self::allow();
        }
        Self {
            decision: Verdict::Modify,
            reasons,
            modifications,
        }
    }
}
