//! Ledger store
//!
//! JSON repositories for categories, income entries and saving goals, each
//! guarded by an `RwLock` and written atomically. [`Storage`] ties them to
//! one data directory and records every mutation in the audit log.

pub mod categories;
pub mod file_io;
pub mod income;
pub mod savings;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeRepository;
pub use savings::SavingRepository;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PacerPaths;
use crate::error::{PacerError, PacerResult};

pub(crate) fn read_guard<T>(lock: &RwLock<T>) -> PacerResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| PacerError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_guard<T>(lock: &RwLock<T>) -> PacerResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| PacerError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// Access to every repository plus the audit log
pub struct Storage {
    paths: PacerPaths,
    pub categories: CategoryRepository,
    pub income: IncomeRepository,
    pub savings: SavingRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Open the store under `paths`, creating directories as needed.
    /// Nothing is read until [`Storage::load_all`].
    pub fn new(paths: PacerPaths) -> PacerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            income: IncomeRepository::new(paths.income_file()),
            savings: SavingRepository::new(paths.savings_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &PacerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&self) -> PacerResult<()> {
        self.categories.load()?;
        self.income.load()?;
        self.savings.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> PacerResult<()> {
        self.categories.save()?;
        self.income.save()?;
        self.savings.save()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PacerResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log an update; the change summary is derived from the two snapshots
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> PacerResult<()> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PacerResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
