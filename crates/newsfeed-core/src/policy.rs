//! Ownership policy
//!
//! Boards and comments may only be changed by the user who wrote them, and
//! account routes may only be used by the account holder. Every mutation goes
//! through these guards instead of comparing ids at the call site.

use crate::error::DomainError;
use crate::value_objects::UserId;

/// A resource authored by a single user
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// Allow the action only when the acting user is the owner
pub fn authorize(acting: UserId, owner: UserId) -> Result<(), DomainError> {
    if acting == owner {
        Ok(())
    } else {
        Err(DomainError::NotOwner)
    }
}

/// Allow the action only when the acting user owns `resource`
pub fn ensure_owner<R: Owned + ?Sized>(resource: &R, acting: UserId) -> Result<(), DomainError> {
    authorize(acting, resource.owner_id())
}

/// Allow account operations only on the caller's own account
pub fn ensure_same_user(requested: UserId, acting: UserId) -> Result<(), DomainError> {
    if requested == acting {
        Ok(())
    } else {
        Err(DomainError::IdentityMismatch)
    }
}
