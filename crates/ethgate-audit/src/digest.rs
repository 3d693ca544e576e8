//! Record digests: sealing and integrity verification.
//!
//! Digest input layout (bytes, in order):
//!   1. evaluation_id as hyphenated UUID text
//!   2. timestamp as RFC 3339 text
//!   3. canonical JSON of `{decision, reasons, modifications, action}`
//!      (serde_json, no pretty-printing)
//!
//! The `digest` field itself is never part of the input.

use serde_json::json;
use sha2::{Digest, Sha256};

use ethgate_contracts::{
    error::{EthgateError, EthgateResult},
    record::DecisionRecord,
};

/// Compute the SHA-256 digest of `record` as lowercase hex.
pub fn digest_record(record: &DecisionRecord) -> EthgateResult<String> {
    let body = json!({
        "decision": record.decision,
        "reasons": record.reasons,
        "modifications": record.modifications,
        "action": record.action,
    });
    let body_json = serde_json::to_vec(&body).map_err(|e| EthgateError::Serialization {
        reason: format!("failed to encode record for digest: {}", e),
    })?;

    let mut hasher = Sha256::new();
    hasher.update(record.evaluation_id.0.to_string().as_bytes());
    hasher.update(record.timestamp.to_rfc3339().as_bytes());
    hasher.update(&body_json);

    Ok(hex::encode(hasher.finalize()))
}

/// Attach a digest to `record`, replacing any existing one.
pub fn seal(mut record: DecisionRecord) -> EthgateResult<DecisionRecord> {
    record.digest = digest_record(&record)?;
    Ok(record)
}

/// Return true if `record` carries a digest matching its contents.
///
/// Unsealed records are never valid.
pub fn verify_record(record: &DecisionRecord) -> bool {
    if !record.is_sealed() {
        return false;
    }
    match digest_record(record) {
        Ok(recomputed) => recomputed == record.digest,
        Err(_) => false,
    }
}
