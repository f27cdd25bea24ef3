//! `Data` directory discovery.

use super::{StoreError, StoreResult};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = "Data";
pub const BOOKS_FILE_NAME: &str = "books.txt";
pub const CATEGORIES_FILE_NAME: &str = "categories.txt";
pub const MEMBERS_FILE_NAME: &str = "members.txt";

/// Start directory plus seven ancestors.
const MAX_SEARCH_LEVELS: usize = 8;

/// Resolves the `Data` directory relative to the running executable.
///
/// See [`resolve_data_dir_from`] for the lookup rules.
pub fn resolve_data_dir() -> StoreResult<PathBuf> {
    let exe = std::env::current_exe().map_err(StoreError::ExecutableDir)?;
    let exe_dir = exe.parent().ok_or_else(|| {
        StoreError::ExecutableDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("`{}` has no parent directory", exe.display()),
        ))
    })?;
    resolve_data_dir_from(exe_dir)
}

/// Resolves the `Data` directory by walking upward from `start`.
///
/// Returns the first existing `Data` directory found in `start` or one of
/// its ancestors (eight levels in total). When none exists, creates
/// `start/Data` and returns it.
pub fn resolve_data_dir_from(start: &Path) -> StoreResult<PathBuf> {
    let mut current = Some(start);
    for _ in 0..MAX_SEARCH_LEVELS {
        let Some(dir) = current else {
            break;
        };
        let candidate = dir.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            debug!(
                "event=data_dir_resolve module=store status=ok mode=found path={}",
                candidate.display()
            );
            return Ok(candidate);
        }
        current = dir.parent();
    }

    let fallback = start.join(DATA_DIR_NAME);
    fs::create_dir_all(&fallback).map_err(|err| StoreError::io(&fallback, err))?;
    info!(
        "event=data_dir_resolve module=store status=ok mode=created path={}",
        fallback.display()
    );
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::{resolve_data_dir_from, DATA_DIR_NAME};
    use std::fs;

    #[test]
    fn finds_data_dir_in_ancestor() {
        let root = tempfile::tempdir().expect("temp dir");
        let data = root.path().join(DATA_DIR_NAME);
        fs::create_dir(&data).expect("create Data");
        let nested = root.path().join("target").join("debug");
        fs::create_dir_all(&nested).expect("create nested dirs");

        let resolved = resolve_data_dir_from(&nested).expect("resolve should succeed");
        assert_eq!(resolved, data);
    }

    #[test]
    fn creates_data_dir_next_to_start_when_missing() {
        let root = tempfile::tempdir().expect("temp dir");
        let start = root.path().join("bin");
        fs::create_dir(&start).expect("create start dir");

        let resolved = resolve_data_dir_from(&start).expect("resolve should succeed");
        assert_eq!(resolved, start.join(DATA_DIR_NAME));
        assert!(resolved.is_dir());
    }

    #[test]
    fn ignores_data_dir_beyond_search_depth() {
        let root = tempfile::tempdir().expect("temp dir");
        fs::create_dir(root.path().join(DATA_DIR_NAME)).expect("create far Data");
        let mut start = root.path().to_path_buf();
        for level in 0..8 {
            start = start.join(format!("l{level}"));
        }
        fs::create_dir_all(&start).expect("create deep dirs");

        let resolved = resolve_data_dir_from(&start).expect("resolve should succeed");
        assert_eq!(resolved, start.join(DATA_DIR_NAME));
    }
}
