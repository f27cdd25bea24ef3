//! Field-level primitives shared by every record layout.

use super::{CodecError, CodecResult};
use chrono::{Datelike, NaiveDate};

const DATE_WIDTH: usize = 8;

/// Builds one record line field by field.
#[derive(Debug)]
pub struct RecordWriter {
    record: &'static str,
    line: String,
}

impl RecordWriter {
    pub fn new(record: &'static str, width: usize) -> Self {
        Self {
            record,
            line: String::with_capacity(width),
        }
    }

    /// Appends `value` zero-padded on the left to `width` digits.
    pub fn number(mut self, field: &'static str, value: u32, width: usize) -> CodecResult<Self> {
        let digits = value.to_string();
        if digits.len() > width {
            return Err(self.overflow(field, width, digits.len()));
        }
        self.line.push_str(&format!("{digits:0>width$}"));
        Ok(self)
    }

    /// Appends `value` space-padded on the right to `width` characters.
    pub fn text(mut self, field: &'static str, value: &str, width: usize) -> CodecResult<Self> {
        if value.contains(['\r', '\n']) {
            return Err(CodecError::InvalidText {
                record: self.record,
                field,
            });
        }
        let len = value.chars().count();
        if len > width {
            return Err(self.overflow(field, width, len));
        }
        self.line.push_str(value);
        self.line.extend(std::iter::repeat(' ').take(width - len));
        Ok(self)
    }

    pub fn flag(mut self, value: bool) -> Self {
        self.line.push(if value { '1' } else { '0' });
        self
    }

    /// Appends a date as `YYYYMMDD`.
    pub fn date(mut self, field: &'static str, value: Option<NaiveDate>) -> CodecResult<Self> {
        let Some(date) = value else {
            return Err(CodecError::MissingField {
                record: self.record,
                field,
            });
        };
        if !(0..=9999).contains(&date.year()) {
            let len = date.year().to_string().len() + 4;
            return Err(self.overflow(field, DATE_WIDTH, len));
        }
        self.line.push_str(&date.format("%Y%m%d").to_string());
        Ok(self)
    }

    pub fn finish(self) -> String {
        self.line
    }

    fn overflow(&self, field: &'static str, width: usize, len: usize) -> CodecError {
        CodecError::FieldOverflow {
            record: self.record,
            field,
            width,
            len,
        }
    }
}

/// Slices one record line at fixed character offsets.
#[derive(Debug)]
pub struct RecordReader<'a> {
    record: &'static str,
    rest: &'a str,
}

impl<'a> RecordReader<'a> {
    pub fn new(record: &'static str, line: &'a str) -> Self {
        Self { record, rest: line }
    }

    /// Reads a zero-padded unsigned number. Surrounding spaces are tolerated.
    pub fn number(&mut self, field: &'static str, width: usize) -> CodecResult<u32> {
        let raw = self.take(width);
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.malformed(field, raw));
        }
        digits.parse::<u32>().map_err(|_| self.malformed(field, raw))
    }

    /// Reads a text field with its padding trimmed.
    pub fn text(&mut self, width: usize) -> String {
        self.take(width).trim().to_string()
    }

    /// Reads a one-character flag; only `1` is true.
    pub fn flag(&mut self) -> bool {
        self.take(1) == "1"
    }

    /// Reads an exact `YYYYMMDD` date.
    pub fn date(&mut self, field: &'static str) -> CodecResult<NaiveDate> {
        let raw = self.take(DATE_WIDTH);
        if raw.len() != DATE_WIDTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.malformed(field, raw));
        }
        let part = |range: std::ops::Range<usize>| raw[range].parse::<u32>().unwrap_or(0);
        let (year, month, day) = (part(0..4), part(4..6), part(6..8));
        NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| self.malformed(field, raw))
    }

    fn take(&mut self, width: usize) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .nth(width)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (field, rest) = self.rest.split_at(end);
        self.rest = rest;
        field
    }

    fn malformed(&self, field: &'static str, raw: &str) -> CodecError {
        CodecError::Malformed {
            record: self.record,
            field,
            value: raw.to_string(),
        }
    }
}
