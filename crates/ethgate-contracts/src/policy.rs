//! Policy document types.
//!
//! A policy has three optional sections. An absent section, or an absent
//! field within one, is equivalent to an empty set (or, for
//! `external_requires_approval`, to `true`).

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use crate::action::string_set;

/// Rules whose match rejects the action outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HardBlocks {
    pub blocked_tags: BTreeSet<String>,
    pub blocked_kinds: BTreeSet<String>,
}

/// Rules whose match requires a modification but does not reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoftConstraints {
    pub redact_tags: BTreeSet<String>,
    pub review_kinds: BTreeSet<String>,
}

/// Requirements that apply only to actions with particular attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextRules {
    /// External actions need explicit approval. Defaults to `true`.
    pub external_requires_approval: bool,
}

impl Default for ContextRules {
    fn default() -> Self {
        Self {
            external_requires_approval: true,
        }
    }
}

/// A complete policy with every default applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub hard_blocks: HardBlocks,
    pub soft_constraints: SoftConstraints,
    pub context_rules: ContextRules,
}

impl Policy {
    /// Build a policy from a raw document.
    ///
    /// Malformed fields degrade the same way as in `Action::from_value`; a
    /// non-boolean `external_requires_approval` keeps its default of `true`.
    pub fn from_value(value: &Value) -> Self {
        let hard = value.get("hard_blocks");
        let soft = value.get("soft_constraints");
        let ctx = value.get("context_rules");

        Self {
            hard_blocks: HardBlocks {
                blocked_tags: string_set(hard.and_then(|h| h.get("blocked_tags"))),
                blocked_kinds: string_set(hard.and_then(|h| h.get("blocked_kinds"))),
            },
            soft_constraints: SoftConstraints {
                redact_tags: string_set(soft.and_then(|s| s.get("redact_tags"))),
                review_kinds: string_set(soft.and_then(|s| s.get("review_kinds"))),
            },
            context_rules: ContextRules {
                external_requires_approval: ctx
                    .and_then(|c| c.get("external_requires_approval"))
                    .and_then(Value::as_bool)
                    .unwrap_or(true),
            },
        }
    }
}
