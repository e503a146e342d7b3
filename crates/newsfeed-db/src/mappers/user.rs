//! User model → entity mapper

use newsfeed_core::entities::{User, UserStatus};
use newsfeed_core::error::DomainError;
use newsfeed_core::value_objects::UserId;

use crate::models::UserModel;

/// Fails only if the row holds a status the schema check should have rejected
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let status = UserStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "user {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(User {
            id: UserId::new(model.id),
            username: model.username,
            nickname: model.nickname,
            email: model.email,
            info: model.info,
            status,
            refresh_token: model.refresh_token,
            expired: model.expired,
            created_at: model.created_at,
            modified_at: model.modified_at,
            deleted_at: model.deleted_at,
        })
    }
}
