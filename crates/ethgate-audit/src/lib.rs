//! # ethgate-audit
//!
//! Sealed decision records and audit reports for ethgate.
//!
//! ## Overview
//!
//! Every record handed to an [`AuditWriter`](ethgate_core::traits::AuditWriter)
//! here is sealed with a SHA-256 digest over its contents. Editing any field
//! afterwards, including the passed-through action, is detected by
//! [`verify_record`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ethgate_audit::FileAuditWriter;
//! use ethgate_core::traits::AuditWriter;
//!
//! let writer = FileAuditWriter::new("out/decision.json", "out/audit.md");
//! let sealed = writer.write(record)?;
//! assert!(ethgate_audit::verify_record(&sealed));
//! ```

pub mod digest;
pub mod file;
pub mod memory;
pub mod report;

pub use digest::{digest_record, seal, verify_record};
pub use file::FileAuditWriter;
pub use memory::InMemoryAuditWriter;
pub use report::render_report;

// ── Tests ─────────────────────────────────────────────────────────────────────
