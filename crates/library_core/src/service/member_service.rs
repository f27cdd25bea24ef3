//! Member use-case service.
//!
//! # Responsibility
//! - Validate member contact data before persistence.
//! - Default an unset membership date to the current local date.
//!
//! # Invariants
//! - Stored emails are trimmed and match `local@domain.tld`.
//! - Add rejects an existing id; update and delete require one.

use super::validation::{require_email, require_fits, require_id, require_text, ValidationError};
use super::{ServiceError, ServiceResult};
use crate::codec::member::{EMAIL_LEN, FULL_NAME_LEN, PHONE_LEN};
use crate::codec::FixedWidthRecord;
use crate::model::member::Member;
use crate::model::EntityId;
use crate::repo::Repository;
use chrono::Local;
use log::{info, warn};

const KIND: &str = Member::KIND;

/// Use-case service for members.
pub struct MemberService<R> {
    repo: R,
}

impl<R: Repository<Entity = Member>> MemberService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new member and returns the stored form (trimmed email,
    /// membership date filled in).
    pub fn add(&self, member: &Member) -> ServiceResult<Member> {
        let member = normalize(member)?;
        if self.repo.get_by_id(member.id)?.is_some() {
            warn!(
                "event=member_add module=service status=error id={} error_code=duplicate_id",
                member.id
            );
            return Err(ServiceError::DuplicateId {
                kind: KIND,
                id: member.id,
            });
        }

        self.repo.add(&member)?;
        info!("event=member_add module=service status=ok id={}", member.id);
        Ok(member)
    }

    pub fn get_all(&self) -> ServiceResult<Vec<Member>> {
        Ok(self.repo.get_all()?)
    }

    pub fn get_by_id(&self, id: EntityId) -> ServiceResult<Member> {
        self.repo
            .get_by_id(id)?
            .ok_or(ServiceError::NotFound { kind: KIND, id })
    }

    /// Replaces an existing member and returns the stored form.
    pub fn update(&self, member: &Member) -> ServiceResult<Member> {
        let member = normalize(member)?;
        self.require_existing(member.id)?;

        self.repo.update(&member)?;
        info!("event=member_update module=service status=ok id={}", member.id);
        Ok(member)
    }

    /// Deletes an existing member.
    pub fn delete(&self, id: EntityId) -> ServiceResult<()> {
        self.require_existing(id)?;
        self.repo.delete(id)?;
        info!("event=member_delete module=service status=ok id={}", id);
        Ok(())
    }

    /// Case-insensitive search over full name and email.
    pub fn search(&self, keyword: &str) -> ServiceResult<Vec<Member>> {
        Ok(self.repo.search(keyword.trim())?)
    }

    fn require_existing(&self, id: EntityId) -> ServiceResult<()> {
        if self.repo.get_by_id(id)?.is_none() {
            return Err(ServiceError::NotFound { kind: KIND, id });
        }
        Ok(())
    }
}

fn normalize(member: &Member) -> Result<Member, ValidationError> {
    require_id(KIND, member.id)?;
    require_text(KIND, "full_name", &member.full_name)?;
    require_fits(KIND, "full_name", &member.full_name, FULL_NAME_LEN)?;
    require_text(KIND, "email", &member.email)?;
    require_email(&member.email)?;
    let email = member.email.trim();
    require_fits(KIND, "email", email, EMAIL_LEN)?;
    require_fits(KIND, "phone_number", &member.phone_number, PHONE_LEN)?;

    let mut normalized = member.clone();
    normalized.email = email.to_string();
    if normalized.membership_date.is_none() {
        normalized.membership_date = Some(Local::now().date_naive());
    }
    Ok(normalized)
}
