//! Category service
//!
//! Create, rename, retarget and delete categories. Names are unique
//! regardless of case.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{PacerError, PacerResult};
use crate::models::{Category, CategoryId, Money};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a category at the end of the display order
    pub fn create(&self, name: &str, monthly_target: Money) -> PacerResult<Category> {
        let name = name.trim();
        self.ensure_name_free(name, None)?;

        let mut category = Category::new(name, monthly_target);
        category.sort_order = self.storage.categories.next_sort_order()?;
        category
            .validate()
            .map_err(|e| PacerError::validation(e.field(), e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        info!(category = %category.name, target = %category.monthly_target, "category created");
        Ok(category)
    }

    pub fn get(&self, id: CategoryId) -> PacerResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find by name, full id, or short id (`cat-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> PacerResult<Option<Category>> {
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .find(|c| c.id.matches_short(identifier)))
    }

    /// Like [`find`](Self::find) but a missing category is an error
    pub fn resolve(&self, identifier: &str) -> PacerResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| PacerError::category_not_found(identifier))
    }

    /// All categories in display order
    pub fn list(&self) -> PacerResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Sum of every category's monthly target
    pub fn total_monthly_target(&self) -> PacerResult<Money> {
        Ok(self
            .list()?
            .iter()
            .map(|c| c.monthly_target)
            .sum())
    }

    /// Change name and/or monthly target
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        monthly_target: Option<Money>,
    ) -> PacerResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| PacerError::category_not_found(id.to_string()))?;
        let before = category.clone();

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            self.ensure_name_free(new_name, Some(id))?;
            category.set_name(new_name);
        }

        if let Some(target) = monthly_target {
            category.set_monthly_target(target);
        }

        category
            .validate()
            .map_err(|e| PacerError::validation(e.field(), e.to_string()))?;

        let unchanged =
            category.name == before.name && category.monthly_target == before.monthly_target;
        if unchanged {
            return Ok(before);
        }

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_update(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &before,
            &category,
        )?;

        info!(category = %category.name, "category updated");
        Ok(category)
    }

    pub fn delete(&self, id: CategoryId) -> PacerResult<Category> {
        let removed = self
            .storage
            .categories
            .delete(id)?
            .ok_or_else(|| PacerError::category_not_found(id.to_string()))?;
        self.storage.categories.save()?;

        self.storage.log_delete(
            EntityType::Category,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;

        info!(category = %removed.name, "category deleted");
        Ok(removed)
    }

    fn ensure_name_free(&self, name: &str, owner: Option<CategoryId>) -> PacerResult<()> {
        match self.storage.categories.get_by_name(name)? {
            Some(existing) if Some(existing.id) != owner => Err(PacerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::PacerPaths;
    use crate::models::category::MAX_NAME_LEN;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_assigns_order_and_audits() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let rent = service.create("Arriendo", Money::from_units(1_000_000)).unwrap();
        let food = service.create("  Comida ", Money::from_units(600_000)).unwrap();

        assert_eq!(rent.sort_order, 0);
        assert_eq!(food.sort_order, 1);
        assert_eq!(food.name, "Comida");

        let names: Vec<_> = service.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Arriendo", "Comida"]);
        assert_eq!(
            service.total_monthly_target().unwrap(),
            Money::from_units(1_600_000)
        );

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 2);
        assert!(log.iter().all(|e| e.operation == Operation::Create));
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        let err = service.create("", Money::from_units(10)).unwrap_err();
        assert!(matches!(err, PacerError::Validation { field: "name", .. }));

        let err = service
            .create(&"x".repeat(MAX_NAME_LEN + 1), Money::from_units(10))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service.create("Ocio", Money::zero()).unwrap_err();
        assert!(matches!(
            err,
            PacerError::Validation {
                field: "monthly_target",
                ..
            }
        ));

        assert!(service.list().unwrap().is_empty());
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_names_ignore_case() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);

        service.create("Transporte", Money::from_units(10)).unwrap();
        let err = service.create("TRANSPORTE", Money::from_units(10)).unwrap_err();
        assert!(matches!(err, PacerError::Duplicate { .. }));
    }

    #[test]
    fn test_update() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let other = service.create("Salud", Money::from_units(10)).unwrap();
        let c = service.create("Comida", Money::from_units(600_000)).unwrap();

        let updated = service
            .update(c.id, Some("Mercado"), Some(Money::from_units(650_000)))
            .unwrap();
        assert_eq!(updated.name, "Mercado");
        assert_eq!(updated.monthly_target, Money::from_units(650_000));

        // Renaming to its own name with different case is allowed
        assert!(service.update(c.id, Some("MERCADO"), None).is_ok());

        let err = service.update(c.id, Some("salud"), None).unwrap_err();
        assert!(matches!(err, PacerError::Duplicate { .. }));
        assert_eq!(service.get(other.id).unwrap().unwrap().name, "Salud");

        let err = service.update(c.id, None, Some(Money::zero())).unwrap_err();
        assert!(err.is_validation());

        let last = storage.audit().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Update);
        assert!(last[0].diff_summary.as_deref().unwrap().contains("name"));
    }

    #[test]
    fn test_update_with_same_values_is_noop() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let c = service.create("Comida", Money::from_units(600_000)).unwrap();
        let entries = storage.audit().read_all().unwrap().len();

        let same = service
            .update(c.id, Some(" Comida "), Some(Money::from_units(600_000)))
            .unwrap();
        assert_eq!(same, c);
        assert_eq!(same.updated_at, c.updated_at);
        assert_eq!(service.get(c.id).unwrap().unwrap().updated_at, c.updated_at);
        assert_eq!(storage.audit().read_all().unwrap().len(), entries);

        service.update(c.id, None, Some(Money::from_units(1))).unwrap();
        assert_eq!(storage.audit().read_all().unwrap().len(), entries + 1);
    }

    #[test]
    fn test_find_by_name_and_id() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let c = service.create("Servicios", Money::from_units(10)).unwrap();

        assert_eq!(service.find("servicios").unwrap().unwrap().id, c.id);
        assert_eq!(
            service.find(&c.id.as_uuid().to_string()).unwrap().unwrap().id,
            c.id
        );
        assert_eq!(service.find(&c.id.to_string()).unwrap().unwrap().id, c.id);
        assert!(service.find("nada").unwrap().is_none());
        assert!(service.resolve("nada").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp, storage) = create_test_storage();
        let service = CategoryService::new(&storage);
        let c = service.create("Ocio", Money::from_units(10)).unwrap();

        let removed = service.delete(c.id).unwrap();
        assert_eq!(removed.id, c.id);
        assert!(service.list().unwrap().is_empty());
        assert!(service.delete(c.id).unwrap_err().is_not_found());
    }
}
