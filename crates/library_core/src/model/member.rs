//! Member entity.
//!
//! # Invariants
//! - `membership_date` is `None` only before the member is persisted;
//!   `MemberService` fills it with the current date on add/update.

use super::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: EntityId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// Calendar date the membership started. Unset means "today" on save.
    pub membership_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Member {
    /// Creates an active member with no phone number and an unset date.
    pub fn new(id: EntityId, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            phone_number: String::new(),
            membership_date: None,
            is_active: true,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_membership_date(mut self, date: NaiveDate) -> Self {
        self.membership_date = Some(date);
        self
    }
}
