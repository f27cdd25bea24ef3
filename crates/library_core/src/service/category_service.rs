//! Category use-case service.
//!
//! # Invariants
//! - Add rejects an existing id; update requires one.
//! - Delete does not check existence and does not look at books that
//!   still reference the category.

use super::validation::{require_fits, require_id, require_text, ValidationError};
use super::{ServiceError, ServiceResult};
use crate::codec::category::{DESCRIPTION_LEN, NAME_LEN};
use crate::codec::FixedWidthRecord;
use crate::model::category::Category;
use crate::model::EntityId;
use crate::repo::Repository;
use log::{info, warn};

const KIND: &str = Category::KIND;

/// Use-case service for categories.
pub struct CategoryService<R> {
    repo: R,
}

impl<R: Repository<Entity = Category>> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new category; `DuplicateId` when the id is taken.
    pub fn add(&self, category: &Category) -> ServiceResult<()> {
        validate(category)?;
        if self.repo.get_by_id(category.id)?.is_some() {
            warn!(
                "event=category_add module=service status=error id={} error_code=duplicate_id",
                category.id
            );
            return Err(ServiceError::DuplicateId {
                kind: KIND,
                id: category.id,
            });
        }

        self.repo.add(category)?;
        info!("event=category_add module=service status=ok id={}", category.id);
        Ok(())
    }

    pub fn get_all(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.repo.get_all()?)
    }

    pub fn get_by_id(&self, id: EntityId) -> ServiceResult<Category> {
        self.repo
            .get_by_id(id)?
            .ok_or(ServiceError::NotFound { kind: KIND, id })
    }

    pub fn update(&self, category: &Category) -> ServiceResult<()> {
        validate(category)?;
        if self.repo.get_by_id(category.id)?.is_none() {
            return Err(ServiceError::NotFound {
                kind: KIND,
                id: category.id,
            });
        }

        self.repo.update(category)?;
        info!("event=category_update module=service status=ok id={}", category.id);
        Ok(())
    }

    /// Deletes by id. Unknown ids are a silent no-op.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        self.repo.delete(id)?;
        info!("event=category_delete module=service status=ok id={}", id);
        Ok(())
    }

    /// Case-insensitive name search; blank keyword returns everything.
    pub fn search(&self, keyword: &str) -> ServiceResult<Vec<Category>> {
        Ok(self.repo.search(keyword.trim())?)
    }
}

fn validate(category: &Category) -> Result<(), ValidationError> {
    require_id(KIND, category.id)?;
    require_text(KIND, "name", &category.name)?;
    require_fits(KIND, "name", &category.name, NAME_LEN)?;
    require_fits(KIND, "description", &category.description, DESCRIPTION_LEN)?;
    Ok(())
}
