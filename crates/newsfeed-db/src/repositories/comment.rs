//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use newsfeed_core::entities::{Comment, NewComment};
use newsfeed_core::error::DomainError;
use newsfeed_core::traits::{CommentRepository, RepoResult};
use newsfeed_core::value_objects::{BoardId, CommentId};

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT c.id, c.board_id, c.user_id, c.content, c.like_count,
                   c.created_at, c.modified_at, c.deleted_at
            FROM comments c
            JOIN boards b ON b.id = c.board_id
            WHERE c.id = $1 AND c.deleted_at IS NULL AND b.deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_including_deleted(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, board_id, user_id, content, like_count, created_at, modified_at, deleted_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_board(&self, board_id: BoardId) -> RepoResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT c.id, c.board_id, c.user_id, c.content, c.like_count,
                   c.created_at, c.modified_at, c.deleted_at
            FROM comments c
            JOIN boards b ON b.id = c.board_id
            WHERE c.board_id = $1 AND c.deleted_at IS NULL AND b.deleted_at IS NULL
            ORDER BY c.created_at DESC, c.id DESC
            ",
        )
        .bind(board_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(board_id = %comment.board_id, user_id = %comment.user_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (board_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, board_id, user_id, content, like_count, created_at, modified_at, deleted_at
            ",
        )
        .bind(comment.board_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET content = $2, modified_at = $3
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .bind(comment.modified_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: CommentId) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE comments SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }
}
