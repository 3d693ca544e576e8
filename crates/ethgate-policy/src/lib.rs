//! # ethgate-policy
//!
//! Ordered rule evaluation for the ethgate policy gate.
//!
//! ## Overview
//!
//! [`evaluate`] classifies an [`Action`](ethgate_contracts::action::Action)
//! against a [`Policy`](ethgate_contracts::policy::Policy) as `allow`,
//! `modify`, or `reject`. [`RuleEngine`] binds a policy to the
//! [`PolicyEngine`](ethgate_core::traits::PolicyEngine) trait.
//!
//! ## Rule order
//!
//! 1. hard block by tag
//! 2. hard block by kind
//! 3. external action without approval
//! 4. redaction tags
//! 5. review kinds
//!
//! The first hard block short-circuits. The rest accumulate.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use ethgate_policy::RuleEngine;
//!
//! let engine = RuleEngine::from_file(Path::new("policy.json"))?;
//! // Pass `engine` to `ethgate_core::Gate::new(...)`.
//! ```

pub mod engine;
pub mod loader;
pub mod rule;

pub use engine::{evaluate, RuleEngine};
pub use loader::load_document;
pub use rule::{Rule, RuleEffect, RULES};

// ── Tests ─────────────────────────────────────────────────────────────────────
