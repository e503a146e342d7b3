//! Board service
//!
//! Board CRUD, the hit counter, and the paginated feeds.

use newsfeed_core::entities::NewBoard;
use newsfeed_core::value_objects::{BoardQuery, DateRange, PageRequest};
use newsfeed_core::{ensure_owner, BoardId, DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::{BoardListResponse, BoardRequest, BoardResponse, DateRangeQuery};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Board service
pub struct BoardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a board
    #[instrument(skip(self, request))]
    pub async fn create(&self, user_id: UserId, request: BoardRequest) -> ServiceResult<BoardResponse> {
        let board = self
            .ctx
            .board_repo()
            .create(&NewBoard {
                user_id,
                title: request.title,
                content: request.content,
            })
            .await?;

        info!(board_id = %board.id, "Board created");
        Ok(BoardResponse::from(board))
    }

    /// Read a board, counting the view
    #[instrument(skip(self))]
    pub async fn get(&self, board_id: BoardId) -> ServiceResult<BoardResponse> {
        let board = self
            .ctx
            .board_repo()
            .record_hit(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        Ok(BoardResponse::from(board))
    }

    /// Edit title and content; author only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: UserId,
        board_id: BoardId,
        request: BoardRequest,
    ) -> ServiceResult<BoardResponse> {
        let mut board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;
        ensure_owner(&board, user_id)?;

        board.edit(request.title, request.content);
        self.ctx.board_repo().update(&board).await?;

        info!(board_id = %board_id, "Board updated");
        Ok(BoardResponse::from(board))
    }

    /// Soft-delete a board together with its comments; author only
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId, board_id: BoardId) -> ServiceResult<()> {
        let board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;
        ensure_owner(&board, user_id)?;

        let comments = self.ctx.board_repo().soft_delete_cascade(board_id).await?;

        info!(board_id = %board_id, comments, "Board deleted");
        Ok(())
    }

    /// Every visible board, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<BoardListResponse> {
        self.list(&BoardQuery::all()).await
    }

    /// One page of the newest boards (`page` is 1-based)
    #[instrument(skip(self))]
    pub async fn list_recent(&self, page: i64) -> ServiceResult<BoardListResponse> {
        let page = PageRequest::from_page_number(page)?;
        self.list(&BoardQuery::recent(page)).await
    }

    /// One page of the most liked boards
    #[instrument(skip(self))]
    pub async fn list_most_liked(&self, page: i64) -> ServiceResult<BoardListResponse> {
        let page = PageRequest::from_page_number(page)?;
        self.list(&BoardQuery::most_liked(page)).await
    }

    /// One page of boards created within a range of days
    #[instrument(skip(self))]
    pub async fn list_by_date(
        &self,
        page: i64,
        range: DateRangeQuery,
    ) -> ServiceResult<BoardListResponse> {
        let page = PageRequest::from_page_number(page)?;
        let range = DateRange::parse(&range.start_time, &range.end_time)?;
        self.list(&BoardQuery::created_within(range, page)).await
    }

    async fn list(&self, query: &BoardQuery) -> ServiceResult<BoardListResponse> {
        let boards = self.ctx.board_repo().list(query).await?;
        Ok(BoardListResponse::new(
            boards.iter().map(BoardResponse::from).collect(),
            query.page.map(|page| page.index() + 1),
        ))
    }
}
