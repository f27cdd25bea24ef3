//! Composition root wiring the three services to their files.
//!
//! # Invariants
//! - All files live in one data directory chosen at construction time.
//! - No global instances; callers own the `Library`.

use crate::repo::{BookRepository, CategoryRepository, MemberRepository};
use crate::service::book_service::BookService;
use crate::service::category_service::CategoryService;
use crate::service::member_service::MemberService;
use log::info;
use std::path::{Path, PathBuf};

/// File-backed services for books, categories and members.
pub struct Library {
    data_dir: PathBuf,
    pub books: BookService<BookRepository, CategoryRepository>,
    pub categories: CategoryService<CategoryRepository>,
    pub members: MemberService<MemberRepository>,
}

impl Library {
    /// Builds services over `books.txt`, `categories.txt` and `members.txt`
    /// in `data_dir`. Files are created lazily on first access.
    pub fn open_in(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        info!(
            "event=library_open module=core status=ok data_dir={}",
            data_dir.display()
        );
        Self {
            books: BookService::new(
                BookRepository::in_dir(&data_dir),
                CategoryRepository::in_dir(&data_dir),
            ),
            categories: CategoryService::new(CategoryRepository::in_dir(&data_dir)),
            members: MemberService::new(MemberRepository::in_dir(&data_dir)),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
