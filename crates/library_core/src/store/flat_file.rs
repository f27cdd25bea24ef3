//! Newline-delimited record file.

use super::{StoreError, StoreResult};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Handle to one record file. Holds only the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the file, creating it empty when absent.
    pub fn read_lines(&self) -> StoreResult<Vec<String>> {
        let started_at = Instant::now();
        self.ensure_exists()?;
        let content =
            fs::read_to_string(&self.path).map_err(|err| StoreError::io(&self.path, err))?;
        let lines: Vec<String> = content.lines().map(str::to_owned).collect();
        debug!(
            "event=file_read module=store status=ok path={} lines={} duration_ms={}",
            self.path.display(),
            lines.len(),
            started_at.elapsed().as_millis()
        );
        Ok(lines)
    }

    /// Appends one line. A missing trailing newline on the previous line is
    /// repaired first so records never merge.
    pub fn append_line(&self, line: &str) -> StoreResult<()> {
        self.ensure_exists()?;
        let existing = fs::read(&self.path).map_err(|err| StoreError::io(&self.path, err))?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| StoreError::io(&self.path, err))?;

        let mut buf = String::with_capacity(line.len() + 2);
        if existing.last().is_some_and(|byte| *byte != b'\n') {
            buf.push('\n');
        }
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())
            .map_err(|err| StoreError::io(&self.path, err))?;

        debug!(
            "event=file_append module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    /// Replaces the whole file content with `lines`.
    pub fn write_lines<I, S>(&self, lines: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started_at = Instant::now();
        self.ensure_parent()?;
        let mut content = String::new();
        let mut count = 0usize;
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
            count += 1;
        }
        fs::write(&self.path, content).map_err(|err| StoreError::io(&self.path, err))?;
        debug!(
            "event=file_rewrite module=store status=ok path={} lines={} duration_ms={}",
            self.path.display(),
            count,
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn ensure_parent(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
            }
        }
        Ok(())
    }

    fn ensure_exists(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.ensure_parent()?;
        fs::write(&self.path, "").map_err(|err| StoreError::io(&self.path, err))
    }
}
