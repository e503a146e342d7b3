//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use newsfeed_core::entities::{NewUser, User, UserStatus};
use newsfeed_core::error::DomainError;
use newsfeed_core::traits::{RepoResult, UserRepository, WithdrawalSummary};
use newsfeed_core::value_objects::UserId;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Name the taken field from the violated constraint
fn duplicate_user_field(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("uq_users_username") => DomainError::UsernameAlreadyExists,
        Some("uq_users_nickname") => DomainError::NicknameAlreadyExists,
        Some("uq_users_email") => DomainError::EmailAlreadyExists,
        other => DomainError::DatabaseError(format!(
            "unexpected unique violation on users: {}",
            other.unwrap_or("<unnamed>")
        )),
    }
}

fn into_user(model: Option<UserModel>) -> RepoResult<Option<User>> {
    model.map(User::try_from).transpose()
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, nickname, email, info, status, refresh_token, expired,
                   created_at, modified_at, deleted_at
            FROM users
            WHERE id = $1 AND status = 'ACTIVE' AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_user(result)
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, nickname, email, info, status, refresh_token, expired,
                   created_at, modified_at, deleted_at
            FROM users
            WHERE username = $1 AND status = 'ACTIVE' AND deleted_at IS NULL
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_user(result)
    }

    #[instrument(skip(self, token))]
    async fn find_by_refresh_token(&self, token: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, nickname, email, info, status, refresh_token, expired,
                   created_at, modified_at, deleted_at
            FROM users
            WHERE refresh_token = $1 AND status = 'ACTIVE' AND deleted_at IS NULL
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_user(result)
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1)")
            .bind(nickname)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, user, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, nickname, email, password_hash, info, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, nickname, email, info, status, refresh_token, expired,
                      created_at, modified_at, deleted_at
            ",
        )
        .bind(&user.username)
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.info)
        .bind(UserStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_user_field))?;

        User::try_from(model)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET nickname = $2, email = $3, info = $4, modified_at = $5
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(&user.info)
        .bind(user.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_user_field))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2, modified_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self, refresh_token))]
    async fn update_session(
        &self,
        id: UserId,
        refresh_token: Option<&str>,
        expired: bool,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET refresh_token = $2, expired = $3
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(refresh_token)
        .bind(expired)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn withdraw(&self, id: UserId) -> RepoResult<WithdrawalSummary> {
        // NOW() is fixed for the whole transaction, so every row gets the same timestamp
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let account = sqlx::query(
            r"
            UPDATE users
            SET status = $2, deleted_at = NOW(), modified_at = NOW(),
                expired = TRUE, refresh_token = NULL
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(UserStatus::Deleted.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if account.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        let boards = sqlx::query(
            "UPDATE boards SET deleted_at = NOW() WHERE user_id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let comments = sqlx::query(
            "UPDATE comments SET deleted_at = NOW() WHERE user_id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let summary = WithdrawalSummary {
            boards: boards.rows_affected(),
            comments: comments.rows_affected(),
        };
        info!(
            user_id = %id,
            boards = summary.boards,
            comments = summary.comments,
            "User withdrawn"
        );

        Ok(summary)
    }
}
