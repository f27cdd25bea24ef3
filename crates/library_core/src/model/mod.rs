//! Library domain model.
//!
//! # Responsibility
//! - Define the three entity shapes persisted by core: books, categories, members.
//! - Keep field widths next to the fields they constrain.
//!
//! # Invariants
//! - Every entity is identified by a positive `EntityId`.
//! - Id uniqueness is a service-layer rule; storage does not enforce it.
//!
//! # See also
//! - crate::codec for the on-disk line layout.

pub mod book;
pub mod category;
pub mod member;

/// Integer identifier shared by every entity kind.
///
/// Stored zero-padded to five digits, so valid values are `1..=99999`.
pub type EntityId = u32;

/// Largest id that fits the five-digit id field.
pub const MAX_ENTITY_ID: EntityId = 99_999;
