//! Book entity.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// A catalogued book.
///
/// `category_id` must point at an existing category whenever the book is
/// added or updated through `BookService`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: u32,
    pub category_id: EntityId,
    pub is_available: bool,
}

impl Book {
    /// Creates an available book with empty author/ISBN and year `0`.
    pub fn new(id: EntityId, title: impl Into<String>, category_id: EntityId) -> Self {
        Self {
            id,
            title: title.into(),
            author: String::new(),
            isbn: String::new(),
            published_year: 0,
            category_id,
            is_available: true,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn with_published_year(mut self, year: u32) -> Self {
        self.published_year = year;
        self
    }
}
