//! Repository layer abstractions and flat-file implementation.
//!
//! # Responsibility
//! - Define per-entity CRUD + keyword search contracts.
//! - Isolate file and line-format details from services.
//!
//! # Invariants
//! - Lookups by id return `Ok(None)` on absence; only `update` reports
//!   `RepoError::NotFound`.
//! - Id uniqueness is not checked here.
//! - A corrupt stored line fails the whole read; no partial results.

pub mod flat_file_repo;

use crate::codec::CodecError;
use crate::model::EntityId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use flat_file_repo::{
    BookRepository, CategoryRepository, FlatFileRepository, MemberRepository, Searchable,
};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// `update` targeted an id with no stored record.
    NotFound { kind: &'static str, id: EntityId },
    /// Entity could not be encoded into its record line.
    Codec(CodecError),
    /// Stored line is long enough to decode but holds invalid data.
    CorruptLine {
        path: PathBuf,
        line: usize,
        source: CodecError,
    },
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} with id={id} not found"),
            Self::Codec(err) => write!(f, "{err}"),
            Self::CorruptLine { path, line, source } => {
                write!(f, "{}:{line}: {source}", path.display())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Codec(err) => Some(err),
            Self::CorruptLine { source, .. } => Some(source),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<CodecError> for RepoError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Raw CRUD contract for one entity kind.
pub trait Repository {
    type Entity;

    /// Appends the entity without checking for an existing id.
    fn add(&self, entity: &Self::Entity) -> RepoResult<()>;
    /// Returns the first stored entity with `id`, or `None`.
    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<Self::Entity>>;
    /// Returns every decodable entity in file order.
    fn get_all(&self) -> RepoResult<Vec<Self::Entity>>;
    /// Replaces the stored entity with the same id in place.
    fn update(&self, entity: &Self::Entity) -> RepoResult<()>;
    /// Removes every entity with `id`; absent ids are a no-op.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
    /// Case-insensitive substring search over the kind's text fields.
    fn search(&self, keyword: &str) -> RepoResult<Vec<Self::Entity>>;
}
