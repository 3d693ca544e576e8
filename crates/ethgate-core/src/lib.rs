//! # ethgate-core
//!
//! The evaluation gate for ethgate.
//!
//! This crate provides:
//! - The two seam traits (`PolicyEngine`, `AuditWriter`)
//! - The `Gate` that runs an action through both in order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ethgate_core::{Gate, traits::{AuditWriter, PolicyEngine}};
//! ```

pub mod gate;
pub mod traits;

pub use gate::Gate;
