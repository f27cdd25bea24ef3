//! Book use-case service.
//!
//! # Responsibility
//! - Validate books and their category reference before persistence.
//! - Provide title/author/category-id keyword search.
//!
//! # Invariants
//! - Add rejects an existing id; update and delete require one.
//! - A book is never written while its `category_id` is unknown.

use super::validation::{require_at_most, require_fits, require_id, require_text, ValidationError};
use super::{ServiceError, ServiceResult};
use crate::codec::book::{AUTHOR_LEN, ISBN_LEN, TITLE_LEN};
use crate::codec::FixedWidthRecord;
use crate::model::book::Book;
use crate::model::category::Category;
use crate::model::{EntityId, MAX_ENTITY_ID};
use crate::repo::Repository;
use log::{info, warn};

const KIND: &str = Book::KIND;
const MAX_PUBLISHED_YEAR: u32 = 9999;

/// Use-case service for books.
pub struct BookService<B, C> {
    books: B,
    categories: C,
}

impl<B, C> BookService<B, C>
where
    B: Repository<Entity = Book>,
    C: Repository<Entity = Category>,
{
    /// Creates a service over a book repository and the category repository
    /// used for reference checks.
    pub fn new(books: B, categories: C) -> Self {
        Self { books, categories }
    }

    /// Adds a new book.
    ///
    /// # Errors
    /// - `Validation` for bad fields or an unknown category.
    /// - `DuplicateId` when the id is already stored.
    pub fn add(&self, book: &Book) -> ServiceResult<()> {
        validate(book)?;
        self.require_category(book.category_id)?;
        if self.books.get_by_id(book.id)?.is_some() {
            warn!(
                "event=book_add module=service status=error id={} error_code=duplicate_id",
                book.id
            );
            return Err(ServiceError::DuplicateId {
                kind: KIND,
                id: book.id,
            });
        }

        self.books.add(book)?;
        info!("event=book_add module=service status=ok id={}", book.id);
        Ok(())
    }

    pub fn get_all(&self) -> ServiceResult<Vec<Book>> {
        Ok(self.books.get_all()?)
    }

    /// Returns the book with `id` or `NotFound`.
    pub fn get_by_id(&self, id: EntityId) -> ServiceResult<Book> {
        self.books
            .get_by_id(id)?
            .ok_or(ServiceError::NotFound { kind: KIND, id })
    }

    /// Replaces an existing book, re-checking its category.
    pub fn update(&self, book: &Book) -> ServiceResult<()> {
        validate(book)?;
        self.require_existing(book.id)?;
        self.require_category(book.category_id)?;

        self.books.update(book)?;
        info!("event=book_update module=service status=ok id={}", book.id);
        Ok(())
    }

    /// Deletes an existing book.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        self.require_existing(id)?;
        self.books.delete(id)?;
        info!("event=book_delete module=service status=ok id={}", id);
        Ok(())
    }

    /// Case-insensitive search over title, author and the decimal category id.
    ///
    /// A blank keyword returns every book.
    pub fn search(&self, keyword: &str) -> ServiceResult<Vec<Book>> {
        let needle = keyword.trim().to_lowercase();
        Ok(self
            .books
            .get_all()?
            .into_iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book.category_id.to_string().contains(&needle)
            })
            .collect())
    }

    fn require_existing(&self, id: EntityId) -> ServiceResult<()> {
        if self.books.get_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound { kind: KIND, id });
        }
        Ok(())
    }

    fn require_category(&self, category_id: EntityId) -> ServiceResult<()> {
        if self.categories.get_by_id(category_id)?.is_none() {
            warn!(
                "event=book_category_check module=service status=error category_id={} error_code=missing_category",
                category_id
            );
            return Err(ValidationError::MissingCategory(category_id).into());
        }
        Ok(())
    }
}

fn validate(book: &Book) -> Result<(), ValidationError> {
    require_id(KIND, book.id)?;
    require_text(KIND, "title", &book.title)?;
    require_fits(KIND, "title", &book.title, TITLE_LEN)?;
    require_fits(KIND, "author", &book.author, AUTHOR_LEN)?;
    require_fits(KIND, "isbn", &book.isbn, ISBN_LEN)?;
    require_at_most(KIND, "published_year", book.published_year, MAX_PUBLISHED_YEAR)?;
    require_at_most(KIND, "category_id", book.category_id, MAX_ENTITY_ID)?;
    Ok(())
}
