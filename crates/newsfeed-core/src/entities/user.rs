//! User entity - represents a registered account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Account lifecycle state. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Deleted,
}

impl UserStatus {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
        }
    }

    /// Parse the stored representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ACTIVE" => Some(Self::Active),
            "DELETED" => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// User entity. The password hash is kept out of the entity and only read
/// through `UserRepository::get_password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub info: Option<String>,
    pub status: UserStatus,
    /// Refresh token of the current login session
    pub refresh_token: Option<String>,
    /// Set on logout and withdrawal; blocks token reissue
    pub expired: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the account has not been withdrawn
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active && self.deleted_at.is_none()
    }

    /// Check if the account currently holds a usable login session
    #[inline]
    pub fn has_live_session(&self) -> bool {
        self.is_active() && !self.expired
    }

    /// Apply the non-blank fields of a profile change.
    /// Returns true if anything changed.
    pub fn apply_profile(&mut self, changes: &ProfileChanges) -> bool {
        let mut changed = false;
        if let Some(nickname) = non_blank(changes.nickname.as_deref()) {
            self.nickname = nickname.to_string();
            changed = true;
        }
        if let Some(email) = non_blank(changes.email.as_deref()) {
            self.email = email.to_string();
            changed = true;
        }
        if let Some(info) = non_blank(changes.info.as_deref()) {
            self.info = Some(info.to_string());
            changed = true;
        }
        if changed {
            self.modified_at = Utc::now();
        }
        changed
    }

    /// Record a fresh login session
    pub fn start_session(&mut self, refresh_token: String) {
        self.refresh_token = Some(refresh_token);
        self.expired = false;
    }

    /// Log out. The refresh token is kept so a later reissue with it is
    /// reported as revoked rather than unknown.
    pub fn end_session(&mut self) {
        self.expired = true;
    }

    /// Mark the account withdrawn
    pub fn withdraw(&mut self, at: DateTime<Utc>) {
        self.status = UserStatus::Deleted;
        self.deleted_at = Some(at);
        self.modified_at = at;
        self.refresh_token = None;
        self.end_session();
    }
}

/// Fields needed to register an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub info: Option<String>,
}

/// Optional profile fields; blank values are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub info: Option<String>,
}

impl ProfileChanges {
    /// Check if no field carries a non-blank value
    pub fn is_empty(&self) -> bool {
        non_blank(self.nickname.as_deref()).is_none()
            && non_blank(self.email.as_deref()).is_none()
            && non_blank(self.info.as_deref()).is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
