//! Repository backed by one fixed-width record file per entity kind.
//!
//! # Invariants
//! - Every operation re-reads the file; updates and deletes rewrite it whole.
//! - Blank and short lines are skipped on read and dropped on rewrite.
//! - A rewrite only happens when the record set actually changed.

use super::{RepoError, RepoResult, Repository};
use crate::codec::FixedWidthRecord;
use crate::model::book::Book;
use crate::model::category::Category;
use crate::model::member::Member;
use crate::model::EntityId;
use crate::store::{FlatFile, BOOKS_FILE_NAME, CATEGORIES_FILE_NAME, MEMBERS_FILE_NAME};
use log::{debug, warn};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Text fields matched by repository keyword search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Book {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str(), self.isbn.as_str()]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Member {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.email.as_str()]
    }
}

pub type BookRepository = FlatFileRepository<Book>;
pub type CategoryRepository = FlatFileRepository<Category>;
pub type MemberRepository = FlatFileRepository<Member>;

/// Flat-file repository for any fixed-width record type.
#[derive(Debug, Clone)]
pub struct FlatFileRepository<R> {
    file: FlatFile,
    _record: PhantomData<R>,
}

impl<R> FlatFileRepository<R> {
    /// Creates a repository over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl BookRepository {
    /// Repository over `books.txt` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(BOOKS_FILE_NAME))
    }
}

impl CategoryRepository {
    /// Repository over `categories.txt` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(CATEGORIES_FILE_NAME))
    }
}

impl MemberRepository {
    /// Repository over `members.txt` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(MEMBERS_FILE_NAME))
    }
}

impl<R: FixedWidthRecord> FlatFileRepository<R> {
    /// Encodes every record before touching the file, so an unencodable
    /// record leaves the file as it was.
    fn write_all(&self, records: &[R]) -> RepoResult<()> {
        let lines = records
            .iter()
            .map(FixedWidthRecord::encode)
            .collect::<Result<Vec<_>, _>>()?;
        self.file.write_lines(lines)?;
        Ok(())
    }
}

impl<R: FixedWidthRecord + Searchable + Clone> Repository for FlatFileRepository<R> {
    type Entity = R;

    fn add(&self, entity: &R) -> RepoResult<()> {
        let line = entity.encode()?;
        self.file.append_line(&line)?;
        debug!(
            "event=repo_add module=repo status=ok kind={} id={}",
            R::KIND,
            entity.id()
        );
        Ok(())
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<R>> {
        Ok(self.get_all()?.into_iter().find(|entity| entity.id() == id))
    }

    fn get_all(&self) -> RepoResult<Vec<R>> {
        let lines = self.file.read_lines()?;
        let mut records = Vec::with_capacity(lines.len());
        let mut skipped = 0usize;

        for (idx, line) in lines.iter().enumerate() {
            match R::decode(line) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => skipped += 1,
                Err(source) => {
                    warn!(
                        "event=repo_read module=repo status=error kind={} line={} error_code=corrupt_line",
                        R::KIND,
                        idx + 1
                    );
                    return Err(RepoError::CorruptLine {
                        path: self.file.path().to_path_buf(),
                        line: idx + 1,
                        source,
                    });
                }
            }
        }

        debug!(
            "event=repo_read module=repo status=ok kind={} records={} skipped={}",
            R::KIND,
            records.len(),
            skipped
        );
        Ok(records)
    }

    fn update(&self, entity: &R) -> RepoResult<()> {
        let mut records = self.get_all()?;
        let Some(slot) = records.iter_mut().find(|record| record.id() == entity.id()) else {
            return Err(RepoError::NotFound {
                kind: R::KIND,
                id: entity.id(),
            });
        };
        *slot = entity.clone();
        self.write_all(&records)?;
        debug!(
            "event=repo_update module=repo status=ok kind={} id={}",
            R::KIND,
            entity.id()
        );
        Ok(())
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        let records = self.get_all()?;
        let before = records.len();
        let kept: Vec<R> = records
            .into_iter()
            .filter(|record| record.id() != id)
            .collect();
        let removed = before - kept.len();

        if removed > 0 {
            self.write_all(&kept)?;
        }
        debug!(
            "event=repo_delete module=repo status=ok kind={} id={} removed={}",
            R::KIND,
            id,
            removed
        );
        Ok(())
    }

    fn search(&self, keyword: &str) -> RepoResult<Vec<R>> {
        let needle = keyword.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|record| {
                record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect())
    }
}
