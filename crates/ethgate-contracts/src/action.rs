//! The action descriptor under evaluation.
//!
//! Action documents arrive as loosely-shaped JSON. `Action::from_value` is
//! the single place where field defaults are applied; the rule table only
//! ever sees the typed view.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

/// Kind assumed when the document carries no usable `kind` field.
pub const DEFAULT_KIND: &str = "internal";

/// Typed view of an action document with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Category of the action (e.g. "email", "delete", "post").
    pub kind: String,
    /// Risk labels used for set-based policy matching.
    pub risk_tags: BTreeSet<String>,
    /// True if the action affects something outside the controlled environment.
    pub external: bool,
    /// True if a human has pre-approved this specific action.
    pub has_explicit_approval: bool,
}

impl Default for Action {
    fn default() -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            risk_tags: BTreeSet::new(),
            external: false,
            has_explicit_approval: false,
        }
    }
}

impl Action {
    /// Build the typed view from a raw document.
    ///
    /// Absent or malformed fields fall back to their defaults: a non-string
    /// `kind` becomes `"internal"`, a non-array `risk_tags` becomes empty
    /// (non-string items are skipped), and non-boolean flags become `false`.
    /// A non-object document yields `Action::default()`.
    pub fn from_value(value: &Value) -> Self {
        Self {
            kind: value
                .get("kind")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_KIND)
                .to_string(),
            risk_tags: string_set(value.get("risk_tags")),
            external: flag(value.get("external")),
            has_explicit_approval: flag(value.get("has_explicit_approval")),
        }
    }
}

/// An action as submitted, paired with its typed view.
///
/// `raw` is passed through verbatim into the decision record, unknown fields
/// included.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDocument {
    pub raw: Value,
    pub action: Action,
}

impl ActionDocument {
    pub fn new(raw: Value) -> Self {
        let action = Action::from_value(&raw);
        Self { raw, action }
    }
}

/// Collect the string members of a JSON array into a set.
///
/// Anything other than an array yields the empty set.
pub fn string_set(value: Option<&Value>) -> BTreeSet<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn flag(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}
