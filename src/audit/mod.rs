//! Audit logging for configuration changes
//!
//! Every saved change to the hardware block or the group list is appended to
//! `audit.log` with before/after snapshots.
//!
//! - `AuditEntry`: one logged change
//! - `AuditLogger`: JSONL writer and reader
//! - `generate_diff`: `field: old -> new` summaries for updates

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
