//! Income service
//!
//! Records income entries and answers per-month questions about them.
//! Entries are never edited: a wrong entry is deleted and recorded again.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::calendar::MonthRef;
use crate::error::{PacerError, PacerResult};
use crate::models::{IncomeEntry, IncomeId, Money};
use crate::storage::Storage;

pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record income received on `date`
    pub fn record(
        &self,
        date: NaiveDate,
        amount: Money,
        notes: Option<String>,
    ) -> PacerResult<IncomeEntry> {
        let mut entry = IncomeEntry::new(date, amount);
        if let Some(notes) = notes {
            entry = entry.with_notes(notes.trim());
        }

        entry
            .validate()
            .map_err(|e| PacerError::validation("amount", e.to_string()))?;

        self.storage.income.insert(entry.clone())?;
        self.storage.income.save()?;

        self.storage.log_create(
            EntityType::IncomeEntry,
            entry.id.to_string(),
            Some(format!("{} on {}", entry.amount, entry.date)),
            &entry,
        )?;

        info!(amount = %entry.amount, date = %entry.date, "income recorded");
        Ok(entry)
    }

    pub fn list_for_month(&self, month: MonthRef) -> PacerResult<Vec<IncomeEntry>> {
        self.storage.income.get_for_month(month)
    }

    pub fn total_for_month(&self, month: MonthRef) -> PacerResult<Money> {
        Ok(self
            .list_for_month(month)?
            .iter()
            .map(|e| e.amount)
            .sum())
    }

    /// Find by full id or short id (`inc-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> PacerResult<Option<IncomeEntry>> {
        if let Ok(id) = identifier.parse::<IncomeId>() {
            return self.storage.income.get(id);
        }

        Ok(self
            .storage
            .income
            .get_all()?
            .into_iter()
            .find(|e| e.id.matches_short(identifier)))
    }

    pub fn delete(&self, id: IncomeId) -> PacerResult<IncomeEntry> {
        let removed = self
            .storage
            .income
            .delete(id)?
            .ok_or_else(|| PacerError::income_not_found(id.to_string()))?;
        self.storage.income.save()?;

        self.storage.log_delete(
            EntityType::IncomeEntry,
            removed.id.to_string(),
            Some(format!("{} on {}", removed.amount, removed.date)),
            &removed,
        )?;

        info!(amount = %removed.amount, date = %removed.date, "income deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PacerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_and_total() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service
            .record(date(2025, 1, 3), Money::from_units(120_000), Some(" turno ".into()))
            .unwrap();
        service
            .record(date(2025, 1, 9), Money::from_units(80_000), None)
            .unwrap();
        service
            .record(date(2025, 2, 1), Money::from_units(999), None)
            .unwrap();

        let january = MonthRef::new(2025, 1).unwrap();
        let entries = service.list_for_month(january).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].notes, "turno");
        assert_eq!(
            service.total_for_month(january).unwrap(),
            Money::from_units(200_000)
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let err = service
            .record(date(2025, 1, 3), Money::zero(), None)
            .unwrap_err();
        assert!(matches!(err, PacerError::Validation { field: "amount", .. }));
        assert!(storage.income.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let entry = service
            .record(date(2025, 1, 3), Money::from_units(100), None)
            .unwrap();

        let found = service.find(&entry.id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, entry.id);

        service.delete(entry.id).unwrap();
        assert!(service.find(&entry.id.to_string()).unwrap().is_none());
        assert!(service.delete(entry.id).unwrap_err().is_not_found());

        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }
}
