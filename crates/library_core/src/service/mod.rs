//! Core use-case services.
//!
//! # Responsibility
//! - Validate entities before they reach a repository.
//! - Turn repository absence into caller-facing `NotFound` errors.
//! - Enforce id uniqueness and the book → category reference.
//!
//! # Invariants
//! - Validation failures happen before any write I/O.
//! - Services hold repositories by value and keep no other state.

pub mod book_service;
pub mod category_service;
pub mod member_service;
pub mod validation;

use crate::model::EntityId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use validation::ValidationError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error surfaced to frontends.
#[derive(Debug)]
pub enum ServiceError {
    /// Entity input was rejected before persistence.
    Validation(ValidationError),
    /// Target id has no stored entity.
    NotFound { kind: &'static str, id: EntityId },
    /// Add targeted an id that is already stored.
    DuplicateId { kind: &'static str, id: EntityId },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} with id={id} not found"),
            Self::DuplicateId { kind, id } => write!(f, "{kind} with id={id} already exists"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Repo(other),
        }
    }
}
