//! Authentication service
//!
//! Handles login, token reissue, logout, and access-token authentication.
//! The refresh token of the current session is stored on the user row, so a
//! new login replaces the previous session.

use newsfeed_common::AppError;
use newsfeed_core::entities::User;
use newsfeed_core::{DomainError, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, ReissueRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(e.into());
        }

        let tokens = self.start_session(&mut user).await?;

        info!(user_id = %user.id, "User logged in successfully");
        Ok(tokens)
    }

    /// Exchange the session's refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn reissue(&self, request: ReissueRequest) -> ServiceResult<TokenResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let claimed_id = claims.user_id()?;

        // Only the most recently issued refresh token is accepted
        let mut user = self
            .ctx
            .user_repo()
            .find_by_refresh_token(&request.refresh_token)
            .await?
            .filter(|user| user.id == claimed_id)
            .ok_or(AppError::InvalidToken)?;

        if user.expired {
            warn!(user_id = %user.id, "Reissue rejected: session logged out");
            return Err(AppError::TokenRevoked.into());
        }

        let tokens = self.start_session(&mut user).await?;

        info!(user_id = %user.id, "Tokens reissued");
        Ok(tokens)
    }

    /// Log out, marking the session expired
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: UserId) -> ServiceResult<()> {
        let mut user = self.find_active(user_id).await?;
        user.end_session();

        self.ctx
            .user_repo()
            .update_session(user.id, user.refresh_token.as_deref(), user.expired)
            .await?;

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Resolve an access token to the acting user
    ///
    /// The account must still be active and its session must not have been
    /// logged out.
    #[instrument(skip(self, access_token))]
    pub async fn authenticate(&self, access_token: &str) -> ServiceResult<UserId> {
        let claims = self.ctx.jwt_service().validate_access_token(access_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !user.has_live_session() {
            return Err(AppError::TokenRevoked.into());
        }

        Ok(user.id)
    }

    async fn find_active(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    async fn start_session(&self, user: &mut User) -> ServiceResult<TokenResponse> {
        let pair = self.ctx.jwt_service().issue(user.id)?;
        user.start_session(pair.refresh_token.clone());

        self.ctx
            .user_repo()
            .update_session(user.id, user.refresh_token.as_deref(), user.expired)
            .await?;

        Ok(TokenResponse::from(pair))
    }
}
