//! Human-readable Markdown audit report.

use std::fmt::Write as _;

use serde_json::Value;

use ethgate_contracts::record::DecisionRecord;

/// Render the audit report for one decision record.
///
/// The action fields are read from the raw document, so the report shows
/// what was submitted rather than the defaulted view.
pub fn render_report(record: &DecisionRecord) -> String {
    let mut out = String::new();
    let action = &record.action;

    let _ = writeln!(
        out,
        "# Ethical Compliance Audit ({})\n",
        record.timestamp.to_rfc3339()
    );
    let _ = writeln!(
        out,
        "- Decision: **{}**",
        record.decision.as_str().to_uppercase()
    );
    let _ = writeln!(out, "- Action kind: `{}`", kind_label(action.get("kind")));
    let _ = writeln!(
        out,
        "- External: `{}`",
        action.get("external").unwrap_or(&Value::Bool(false))
    );
    let _ = writeln!(
        out,
        "- Risk tags: `{}`",
        action
            .get("risk_tags")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    );
    if record.is_sealed() {
        let _ = writeln!(out, "- Digest: `{}`", record.digest);
    }

    out.push_str("\n## Reasons\n");
    for reason in &record.reasons {
        let _ = writeln!(out, "- {}", reason);
    }

    if !record.modifications.is_empty() {
        out.push_str("\n## Required Modifications\n");
        for modification in &record.modifications {
            let _ = writeln!(out, "- {}", modification);
        }
    }

    out
}

fn kind_label(kind: Option<&Value>) -> String {
    match kind {
        None => "unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
