//! PostgreSQL implementation of LikeRepository
//!
//! A like row and the `like_count` column of its target always change in the
//! same transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use newsfeed_core::entities::{ContentType, Like};
use newsfeed_core::error::DomainError;
use newsfeed_core::traits::{LikeRepository, RepoResult};
use newsfeed_core::value_objects::{BoardId, CommentId, UserId};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Statement moving a target's like counter by one
fn counter_sql(content_type: ContentType, increment: bool) -> &'static str {
    match (content_type, increment) {
        (ContentType::Board, true) => {
            "UPDATE boards SET like_count = like_count + 1 WHERE id = $1 AND deleted_at IS NULL"
        }
        (ContentType::Board, false) => {
            "UPDATE boards SET like_count = GREATEST(like_count - 1, 0) WHERE id = $1"
        }
        (ContentType::Comment, true) => {
            "UPDATE comments SET like_count = like_count + 1 WHERE id = $1 AND deleted_at IS NULL"
        }
        (ContentType::Comment, false) => {
            "UPDATE comments SET like_count = GREATEST(like_count - 1, 0) WHERE id = $1"
        }
    }
}

fn target_not_found(content_type: ContentType, content_id: i64) -> DomainError {
    match content_type {
        ContentType::Board => DomainError::BoardNotFound(BoardId::new(content_id)),
        ContentType::Comment => DomainError::CommentNotFound(CommentId::new(content_id)),
    }
}

async fn move_counter(
    tx: &mut Transaction<'_, Postgres>,
    content_type: ContentType,
    content_id: i64,
    increment: bool,
) -> RepoResult<u64> {
    let result = sqlx::query(counter_sql(content_type, increment))
        .bind(content_id)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn exists(
        &self,
        user_id: UserId,
        content_type: ContentType,
        content_id: i64,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM likes
                WHERE user_id = $1 AND content_id = $2 AND content_type = $3
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(content_id)
        .bind(content_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, like), fields(user_id = %like.user_id, content_id = like.content_id))]
    async fn like(&self, like: &Like) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO likes (user_id, content_id, content_type, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(like.user_id.into_inner())
        .bind(like.content_id)
        .bind(like.content_type.as_str())
        .bind(like.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::AlreadyLiked))?;

        if move_counter(&mut tx, like.content_type, like.content_id, true).await? == 0 {
            return Err(target_not_found(like.content_type, like.content_id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn unlike(
        &self,
        user_id: UserId,
        content_type: ContentType,
        content_id: i64,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            "DELETE FROM likes WHERE user_id = $1 AND content_id = $2 AND content_type = $3",
        )
        .bind(user_id.into_inner())
        .bind(content_id)
        .bind(content_type.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if removed.rows_affected() == 0 {
            return Ok(false);
        }

        move_counter(&mut tx, content_type, content_id, false).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }
}
