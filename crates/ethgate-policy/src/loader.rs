//! Reading action and policy documents from storage.
//!
//! A document that does not exist is treated as `{}`. A document that exists
//! but does not parse, or whose top level is not an object, is an error.
//! Files ending in `.toml` are read as TOML; everything else as JSON.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use ethgate_contracts::error::{EthgateError, EthgateResult};

/// Load the document at `path`, or `{}` if there is none.
pub fn load_document(path: &Path) -> EthgateResult<Value> {
    if !path.exists() {
        warn!(path = %path.display(), "document not found, using empty document");
        return Ok(Value::Object(Map::new()));
    }

    let label = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| EthgateError::ReadFailed {
        path: label.clone(),
        reason: e.to_string(),
    })?;

    debug!(path = %label, bytes = contents.len(), "document read");

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        parse_toml(&label, &contents)
    } else {
        parse_json(&label, &contents)
    }
}

/// Parse `s` as JSON; `label` names the source in error messages.
pub fn parse_json(label: &str, s: &str) -> EthgateResult<Value> {
    let value: Value = serde_json::from_str(s).map_err(|e| EthgateError::MalformedDocument {
        path: label.to_string(),
        reason: format!("invalid JSON: {}", e),
    })?;
    require_object(label, value)
}

/// Parse `s` as TOML; `label` names the source in error messages.
pub fn parse_toml(label: &str, s: &str) -> EthgateResult<Value> {
    let value: Value = toml::from_str(s).map_err(|e| EthgateError::MalformedDocument {
        path: label.to_string(),
        reason: format!("invalid TOML: {}", e),
    })?;
    require_object(label, value)
}

fn require_object(label: &str, value: Value) -> EthgateResult<Value> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(EthgateError::MalformedDocument {
            path: label.to_string(),
            reason: "top-level value must be an object".to_string(),
        })
    }
}
