//! Field rules shared by the entity services.
//!
//! # Invariants
//! - Every width limit mirrors the codec field width, so a validated
//!   entity always encodes.

use crate::model::{EntityId, MAX_ENTITY_ID};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub type ValidationResult = Result<(), ValidationError>;

/// Entity input rejected before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Id is zero.
    NonPositiveId { kind: &'static str },
    /// Number does not fit its zero-padded field.
    OutOfRange {
        kind: &'static str,
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// Required text is empty or whitespace only.
    Required {
        kind: &'static str,
        field: &'static str,
    },
    /// Text is longer than its fixed-width field.
    TooLong {
        kind: &'static str,
        field: &'static str,
        len: usize,
        max: usize,
    },
    /// Text contains a line break.
    LineBreak {
        kind: &'static str,
        field: &'static str,
    },
    /// Email does not look like `local@domain.tld`.
    InvalidEmail(String),
    /// Book references a category id with no stored category.
    MissingCategory(EntityId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId { kind } => write!(f, "{kind} id must be > 0"),
            Self::OutOfRange {
                kind,
                field,
                value,
                max,
            } => write!(f, "{kind} {field} {value} exceeds maximum {max}"),
            Self::Required { kind, field } => write!(f, "{kind} {field} is required"),
            Self::TooLong {
                kind,
                field,
                len,
                max,
            } => write!(
                f,
                "{kind} {field} is {len} characters long; at most {max} allowed"
            ),
            Self::LineBreak { kind, field } => {
                write!(f, "{kind} {field} must not contain line breaks")
            }
            Self::InvalidEmail(value) => write!(f, "email format is invalid: `{value}`"),
            Self::MissingCategory(id) => write!(f, "category with id={id} not found"),
        }
    }
}

impl Error for ValidationError {}

/// Returns whether `value` (after trimming) looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub(crate) fn require_id(kind: &'static str, id: EntityId) -> ValidationResult {
    if id == 0 {
        return Err(ValidationError::NonPositiveId { kind });
    }
    require_at_most(kind, "id", id, MAX_ENTITY_ID)
}

pub(crate) fn require_at_most(
    kind: &'static str,
    field: &'static str,
    value: u32,
    max: u32,
) -> ValidationResult {
    if value > max {
        return Err(ValidationError::OutOfRange {
            kind,
            field,
            value,
            max,
        });
    }
    Ok(())
}

pub(crate) fn require_text(kind: &'static str, field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { kind, field });
    }
    Ok(())
}

pub(crate) fn require_fits(
    kind: &'static str,
    field: &'static str,
    value: &str,
    max: usize,
) -> ValidationResult {
    if value.contains(['\r', '\n']) {
        return Err(ValidationError::LineBreak { kind, field });
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong {
            kind,
            field,
            len,
            max,
        });
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> ValidationResult {
    if !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail(value.trim().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, require_fits, require_id, require_text, ValidationError};

    #[test]
    fn email_requires_dot_domain() {
        assert!(is_valid_email("bob@example.com"));
        assert!(is_valid_email("  bob@example.com  "));
        assert!(!is_valid_email("bob@example"));
        assert!(!is_valid_email("bob example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("bob@@example.com"));
    }

    #[test]
    fn id_must_be_positive_and_fit_five_digits() {
        assert_eq!(
            require_id("book", 0),
            Err(ValidationError::NonPositiveId { kind: "book" })
        );
        assert!(require_id("book", 1).is_ok());
        assert!(require_id("book", 99_999).is_ok());
        assert!(matches!(
            require_id("book", 100_000),
            Err(ValidationError::OutOfRange { field: "id", .. })
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("category", "name", "   ").is_err());
        assert!(require_text("category", "name", "Fiction").is_ok());
    }

    #[test]
    fn text_width_counts_chars() {
        assert!(require_fits("category", "name", "ééééé", 5).is_ok());
        assert!(matches!(
            require_fits("category", "name", "ééééé", 4),
            Err(ValidationError::TooLong { len: 5, max: 4, .. })
        ));
        assert!(matches!(
            require_fits("category", "name", "a\nb", 10),
            Err(ValidationError::LineBreak { .. })
        ));
    }
}
