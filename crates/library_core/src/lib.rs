//! Core domain logic for the library console.
//! Fixed-width record files, repositories over them, and validating services.

pub mod codec;
pub mod library;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use codec::{CodecError, CodecResult, FixedWidthRecord};
pub use library::Library;
pub use logging::{default_log_level, init_logging, logging_status, LOG_DIR_NAME};
pub use model::book::Book;
pub use model::category::Category;
pub use model::member::Member;
pub use model::EntityId;
pub use repo::{
    BookRepository, CategoryRepository, FlatFileRepository, MemberRepository, RepoError,
    RepoResult, Repository,
};
pub use service::book_service::BookService;
pub use service::category_service::CategoryService;
pub use service::member_service::MemberService;
pub use service::validation::{is_valid_email, ValidationError};
pub use service::{ServiceError, ServiceResult};
pub use store::{resolve_data_dir, resolve_data_dir_from, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
