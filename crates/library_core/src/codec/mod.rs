//! Fixed-width line codec for persisted entities.
//!
//! # Responsibility
//! - Map each entity to exactly one fixed-width text line and back.
//! - Distinguish skippable lines (blank/short) from corrupt ones.
//!
//! # Invariants
//! - Fields are written in declared order with no separators.
//! - Numbers are zero-padded left, text is space-padded right, flags are `1`/`0`.
//! - Encoding never produces a line longer than `WIDTH` or containing a newline.
//! - Widths count `char`s, not bytes.
//!
//! # See also
//! - crate::store::flat_file for how lines reach disk.

pub(crate) mod book;
pub(crate) mod category;
pub mod field;
pub(crate) mod member;

pub use book::BOOK_RECORD_WIDTH;
pub use category::CATEGORY_RECORD_WIDTH;
pub use field::{RecordReader, RecordWriter};
pub use member::MEMBER_RECORD_WIDTH;

use crate::model::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Failure while turning an entity into a line or a line into an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Value does not fit its fixed-width field.
    FieldOverflow {
        record: &'static str,
        field: &'static str,
        width: usize,
        len: usize,
    },
    /// Text value contains a line break and would split the record.
    InvalidText {
        record: &'static str,
        field: &'static str,
    },
    /// Required value is unset and has no encoding.
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    /// Stored field cannot be parsed (non-numeric number, bad date).
    Malformed {
        record: &'static str,
        field: &'static str,
        value: String,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldOverflow {
                record,
                field,
                width,
                len,
            } => write!(
                f,
                "{record}.{field} is {len} characters long but the field holds {width}"
            ),
            Self::InvalidText { record, field } => {
                write!(f, "{record}.{field} must not contain line breaks")
            }
            Self::MissingField { record, field } => write!(f, "{record}.{field} is not set"),
            Self::Malformed {
                record,
                field,
                value,
            } => write!(f, "malformed {record} record: invalid {field} `{value}`"),
        }
    }
}

impl Error for CodecError {}

/// An entity with a fixed-width single-line encoding.
pub trait FixedWidthRecord: Sized {
    /// Lowercase entity name used in errors and log events.
    const KIND: &'static str;
    /// Total number of characters in an encoded line.
    const WIDTH: usize;

    fn id(&self) -> EntityId;

    /// Renders the entity as exactly `WIDTH` characters.
    fn encode(&self) -> CodecResult<String>;

    /// Reads fields in declared order. The reader is guaranteed at least
    /// `WIDTH` characters.
    fn decode_fields(reader: &mut RecordReader<'_>) -> CodecResult<Self>;

    /// Decodes one stored line.
    ///
    /// Returns `Ok(None)` for blank lines and lines shorter than `WIDTH`;
    /// those are skipped by readers. Returns `Err` when a long-enough line
    /// holds unparseable data.
    fn decode(line: &str) -> CodecResult<Option<Self>> {
        if line.trim().is_empty() || line.chars().count() < Self::WIDTH {
            return Ok(None);
        }
        let mut reader = RecordReader::new(Self::KIND, line);
        Self::decode_fields(&mut reader).map(Some)
    }
}
