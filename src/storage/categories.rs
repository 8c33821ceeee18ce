//! Category repository

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::PacerResult;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_guard, write_guard};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryData {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Categories keyed by id, persisted to `categories.json`
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> PacerResult<()> {
        let data: CategoryData = read_json(&self.path)?;

        let mut categories = write_guard(&self.categories)?;
        categories.clear();
        categories.extend(data.categories.into_iter().map(|c| (c.id, c)));
        Ok(())
    }

    pub fn save(&self) -> PacerResult<()> {
        let data = CategoryData {
            categories: self.get_all()?,
        };
        write_json_atomic(&self.path, &data)
    }

    pub fn get(&self, id: CategoryId) -> PacerResult<Option<Category>> {
        Ok(read_guard(&self.categories)?.get(&id).cloned())
    }

    /// Case-insensitive lookup on the trimmed name
    pub fn get_by_name(&self, name: &str) -> PacerResult<Option<Category>> {
        let wanted = name.trim().to_lowercase();
        Ok(read_guard(&self.categories)?
            .values()
            .find(|c| c.name.to_lowercase() == wanted)
            .cloned())
    }

    /// All categories in display order: `sort_order`, then creation time
    pub fn get_all(&self) -> PacerResult<Vec<Category>> {
        let mut list: Vec<_> = read_guard(&self.categories)?.values().cloned().collect();
        list.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(list)
    }

    /// Sort order for a category appended at the end
    pub fn next_sort_order(&self) -> PacerResult<i32> {
        Ok(read_guard(&self.categories)?
            .values()
            .map(|c| c.sort_order + 1)
            .max()
            .unwrap_or(0))
    }

    pub fn upsert(&self, category: Category) -> PacerResult<()> {
        write_guard(&self.categories)?.insert(category.id, category);
        Ok(())
    }

    pub fn delete(&self, id: CategoryId) -> PacerResult<Option<Category>> {
        Ok(write_guard(&self.categories)?.remove(&id))
    }

    pub fn count(&self) -> PacerResult<usize> {
        Ok(read_guard(&self.categories)?.len())
    }
}
