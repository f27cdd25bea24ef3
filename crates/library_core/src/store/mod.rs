//! Plain-text file storage for fixed-width records.
//!
//! # Responsibility
//! - Resolve the `Data` directory that holds the entity files.
//! - Read and (re)write newline-delimited record files.
//!
//! # Invariants
//! - Every call opens, processes and closes its file; nothing is cached.
//! - A missing directory or file is created empty on first access.
//! - Writes are neither atomic nor locked; one process, one writer.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod flat_file;
mod paths;

pub use flat_file::FlatFile;
pub use paths::{
    resolve_data_dir, resolve_data_dir_from, BOOKS_FILE_NAME, CATEGORIES_FILE_NAME,
    DATA_DIR_NAME, MEMBERS_FILE_NAME,
};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// File-system operation failed on `path`.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The running executable's location could not be determined.
    ExecutableDir(std::io::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::ExecutableDir(err) => write!(f, "cannot locate executable directory: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::ExecutableDir(err) => Some(err),
        }
    }
}
