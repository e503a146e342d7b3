//! User service
//!
//! Sign-up, profile management, password change, and account withdrawal.
//! Every account route acts on the caller's own account only.

use newsfeed_common::auth::validate_password_strength;
use newsfeed_core::entities::{NewUser, ProfileChanges, User};
use newsfeed_core::{ensure_same_user, DomainError, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{
    ChangePasswordRequest, ProfileResponse, SignOutRequest, SignUpRequest, SignUpResponse,
    UpdateProfileRequest, WithdrawalResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<SignUpResponse> {
        validate_password_strength(&request.password)?;

        let repo = self.ctx.user_repo();
        if repo.username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }
        if repo.email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if repo.nickname_exists(&request.nickname).await? {
            return Err(DomainError::NicknameAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = repo
            .create(
                &NewUser {
                    username: request.username,
                    nickname: request.nickname,
                    email: request.email,
                    info: request.info.filter(|info| !info.trim().is_empty()),
                },
                &password_hash,
            )
            .await?;

        info!(user_id = %user.id, "User signed up");
        Ok(SignUpResponse {
            user_id: user.id.into_inner(),
        })
    }

    /// Get the caller's own profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: UserId, acting: UserId) -> ServiceResult<ProfileResponse> {
        ensure_same_user(user_id, acting)?;
        let user = self.find_active(user_id).await?;
        Ok(ProfileResponse::from(&user))
    }

    /// Update nickname, email, or info after re-checking the password
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        acting: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        ensure_same_user(user_id, acting)?;
        let mut user = self.find_active(user_id).await?;
        self.verify_password(user.id, &request.password).await?;

        let changes = ProfileChanges {
            nickname: request.nickname,
            email: request.email,
            info: request.info,
        };
        self.ensure_unique_changes(&user, &changes).await?;

        if user.apply_profile(&changes) {
            self.ctx.user_repo().update_profile(&user).await?;
            info!(user_id = %user.id, "Profile updated");
        }

        Ok(ProfileResponse::from(&user))
    }

    /// Replace the password after verifying the current one
    #[instrument(skip(self, request))]
    pub async fn update_password(
        &self,
        user_id: UserId,
        acting: UserId,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        ensure_same_user(user_id, acting)?;
        let user = self.find_active(user_id).await?;
        self.verify_password(user.id, &request.old_password).await?;
        validate_password_strength(&request.new_password)?;

        let password_hash = self.ctx.password_service().hash(&request.new_password)?;
        self.ctx
            .user_repo()
            .update_password(user.id, &password_hash)
            .await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    /// Withdraw the account, soft-deleting all of its boards and comments
    #[instrument(skip(self, request))]
    pub async fn sign_out(
        &self,
        user_id: UserId,
        acting: UserId,
        request: SignOutRequest,
    ) -> ServiceResult<WithdrawalResponse> {
        ensure_same_user(user_id, acting)?;
        let user = self.find_active(user_id).await?;
        self.verify_password(user.id, &request.password).await?;

        let summary = self.ctx.user_repo().withdraw(user.id).await?;

        info!(
            user_id = %user.id,
            boards = summary.boards,
            comments = summary.comments,
            "User withdrew"
        );
        Ok(WithdrawalResponse::from(summary))
    }

    async fn find_active(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    async fn verify_password(&self, user_id: UserId, password: &str) -> ServiceResult<()> {
        let hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx
            .password_service()
            .verify_or_error(password, &hash)
            .inspect_err(|_| warn!(user_id = %user_id, "Password check failed"))?;
        Ok(())
    }

    /// Reject a nickname or email already held by another account
    async fn ensure_unique_changes(&self, user: &User, changes: &ProfileChanges) -> ServiceResult<()> {
        let repo = self.ctx.user_repo();

        if let Some(nickname) = changed(changes.nickname.as_deref(), &user.nickname) {
            if repo.nickname_exists(nickname).await? {
                return Err(DomainError::NicknameAlreadyExists.into());
            }
        }
        if let Some(email) = changed(changes.email.as_deref(), &user.email) {
            if repo.email_exists(email).await? {
                return Err(DomainError::EmailAlreadyExists.into());
            }
        }

        Ok(())
    }
}

/// A non-blank requested value that differs from the current one
fn changed<'v>(requested: Option<&'v str>, current: &str) -> Option<&'v str> {
    requested
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != current)
}
