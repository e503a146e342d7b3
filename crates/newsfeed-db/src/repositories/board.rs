//! PostgreSQL implementation of BoardRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{info, instrument};

use newsfeed_core::entities::{Board, NewBoard};
use newsfeed_core::error::DomainError;
use newsfeed_core::traits::{BoardRepository, RepoResult};
use newsfeed_core::value_objects::{BoardId, BoardQuery, BoardSort};

use crate::models::BoardModel;

use super::error::map_db_error;

const BOARD_COLUMNS: &str =
    "id, user_id, title, content, hits, like_count, created_at, modified_at, deleted_at";

/// PostgreSQL implementation of BoardRepository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the SELECT for a board listing
fn list_query(query: &BoardQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder
        .push(BOARD_COLUMNS)
        .push(" FROM boards WHERE deleted_at IS NULL");

    if let Some(range) = query.created_within {
        builder
            .push(" AND created_at BETWEEN ")
            .push_bind(range.start())
            .push(" AND ")
            .push_bind(range.end());
    }

    builder.push(match query.sort {
        BoardSort::Recent => " ORDER BY created_at DESC, id DESC",
        BoardSort::MostLiked => " ORDER BY like_count DESC, created_at DESC, id DESC",
    });

    if let Some(page) = query.page {
        builder
            .push(" LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());
    }

    builder
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BoardId) -> RepoResult<Option<Board>> {
        let result = sqlx::query_as::<_, BoardModel>(
            r"
            SELECT id, user_id, title, content, hits, like_count, created_at, modified_at, deleted_at
            FROM boards
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Board::from))
    }

    #[instrument(skip(self))]
    async fn find_including_deleted(&self, id: BoardId) -> RepoResult<Option<Board>> {
        let result = sqlx::query_as::<_, BoardModel>(
            r"
            SELECT id, user_id, title, content, hits, like_count, created_at, modified_at, deleted_at
            FROM boards
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Board::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &BoardQuery) -> RepoResult<Vec<Board>> {
        let mut builder = list_query(query);
        let rows = builder
            .build_query_as::<BoardModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Board::from).collect())
    }

    #[instrument(skip(self, board), fields(user_id = %board.user_id))]
    async fn create(&self, board: &NewBoard) -> RepoResult<Board> {
        let model = sqlx::query_as::<_, BoardModel>(
            r"
            INSERT INTO boards (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content, hits, like_count, created_at, modified_at, deleted_at
            ",
        )
        .bind(board.user_id.into_inner())
        .bind(&board.title)
        .bind(&board.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Board::from(model))
    }

    #[instrument(skip(self, board), fields(board_id = %board.id))]
    async fn update(&self, board: &Board) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE boards
            SET title = $2, content = $3, modified_at = $4
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(board.id.into_inner())
        .bind(&board.title)
        .bind(&board.content)
        .bind(board.modified_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BoardNotFound(board.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_hit(&self, id: BoardId) -> RepoResult<Option<Board>> {
        let result = sqlx::query_as::<_, BoardModel>(
            r"
            UPDATE boards
            SET hits = hits + 1
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, user_id, title, content, hits, like_count, created_at, modified_at, deleted_at
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Board::from))
    }

    #[instrument(skip(self))]
    async fn soft_delete_cascade(&self, id: BoardId) -> RepoResult<u64> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let board = sqlx::query(
            "UPDATE boards SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if board.rows_affected() == 0 {
            return Err(DomainError::BoardNotFound(id));
        }

        let comments = sqlx::query(
            "UPDATE comments SET deleted_at = $2 WHERE board_id = $1 AND deleted_at IS NULL",
        )
        .bind(id.into_inner())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(board_id = %id, comments = comments.rows_affected(), "Board deleted");
        Ok(comments.rows_affected())
    }
}
