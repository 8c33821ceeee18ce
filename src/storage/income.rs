//! Income entry repository

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::calendar::MonthRef;
use crate::error::PacerResult;
use crate::models::{IncomeEntry, IncomeId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_guard, write_guard};

#[derive(Debug, Default, Serialize, Deserialize)]
struct IncomeData {
    #[serde(default)]
    entries: Vec<IncomeEntry>,
}

/// Income entries keyed by id, persisted to `income.json`
pub struct IncomeRepository {
    path: PathBuf,
    entries: RwLock<HashMap<IncomeId, IncomeEntry>>,
}

fn chronological(list: &mut [IncomeEntry]) {
    list.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> PacerResult<()> {
        let data: IncomeData = read_json(&self.path)?;

        let mut entries = write_guard(&self.entries)?;
        entries.clear();
        entries.extend(data.entries.into_iter().map(|e| (e.id, e)));
        Ok(())
    }

    pub fn save(&self) -> PacerResult<()> {
        let data = IncomeData {
            entries: self.get_all()?,
        };
        write_json_atomic(&self.path, &data)
    }

    pub fn get(&self, id: IncomeId) -> PacerResult<Option<IncomeEntry>> {
        Ok(read_guard(&self.entries)?.get(&id).cloned())
    }

    /// Entries dated within `month`, oldest first
    pub fn get_for_month(&self, month: MonthRef) -> PacerResult<Vec<IncomeEntry>> {
        let mut list: Vec<_> = read_guard(&self.entries)?
            .values()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect();
        chronological(&mut list);
        Ok(list)
    }

    /// Every entry, oldest first
    pub fn get_all(&self) -> PacerResult<Vec<IncomeEntry>> {
        let mut list: Vec<_> = read_guard(&self.entries)?.values().cloned().collect();
        chronological(&mut list);
        Ok(list)
    }

    pub fn insert(&self, entry: IncomeEntry) -> PacerResult<()> {
        write_guard(&self.entries)?.insert(entry.id, entry);
        Ok(())
    }

    pub fn delete(&self, id: IncomeId) -> PacerResult<Option<IncomeEntry>> {
        Ok(write_guard(&self.entries)?.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entry(y: i32, m: u32, d: u32, units: i64) -> IncomeEntry {
        IncomeEntry::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Money::from_units(units),
        )
    }

    fn repo() -> (IncomeRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));
        (repo, temp_dir)
    }

    #[test]
    fn test_month_filter_and_order() {
        let (repo, _temp) = repo();
        repo.insert(entry(2025, 1, 20, 3)).unwrap();
        repo.insert(entry(2024, 12, 31, 9)).unwrap();
        repo.insert(entry(2025, 1, 1, 1)).unwrap();
        repo.insert(entry(2025, 2, 1, 9)).unwrap();

        let january = repo.get_for_month(MonthRef::new(2025, 1).unwrap()).unwrap();
        let amounts: Vec<_> = january.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, [Money::from_units(1), Money::from_units(3)]);
        assert_eq!(repo.get_all().unwrap().len(), 4);
    }

    #[test]
    fn test_delete() {
        let (repo, _temp) = repo();
        let e = entry(2025, 1, 5, 100);
        repo.insert(e.clone()).unwrap();

        assert_eq!(repo.delete(e.id).unwrap(), Some(e.clone()));
        assert!(repo.get(e.id).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let (repo, temp) = repo();
        let e = entry(2025, 3, 14, 42_000).with_notes("propinas");
        repo.insert(e.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = IncomeRepository::new(temp.path().join("income.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(e.id).unwrap(), Some(e));
    }
}
