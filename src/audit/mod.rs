//! Audit trail for ledger mutations
//!
//! Every create, update and delete of a category, income entry, saving goal
//! or deposit appends one JSON line to `audit.log`:
//!
//! - [`AuditEntry`]: timestamp, operation, entity, before/after snapshots
//! - [`AuditLogger`]: append-only JSONL writer and reader
//! - [`generate_diff`]: one-line summary of the fields an update changed
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Category,
//!     category.id.to_string(),
//!     Some(category.name.clone()),
//!     &category,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
