//! Category entity.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// Book grouping referenced by `Book::category_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(id: EntityId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
