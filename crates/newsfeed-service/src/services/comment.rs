//! Comment service
//!
//! Comments live under a board. Changing a comment checks, in order, that
//! the board exists, the comment exists, neither is deleted, the comment
//! belongs to the board, and the caller wrote it.

use newsfeed_core::entities::{Comment, NewComment};
use newsfeed_core::{ensure_owner, BoardId, CommentId, DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::{CommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a visible board
    #[instrument(skip(self, request))]
    pub async fn add(
        &self,
        user_id: UserId,
        board_id: BoardId,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        self.ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                board_id,
                user_id,
                content: request.content,
            })
            .await?;

        info!(comment_id = %comment.id, "Comment added");
        Ok(CommentResponse::from(comment))
    }

    /// Visible comments of a visible board, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, board_id: BoardId) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        let comments = self.ctx.comment_repo().list_by_board(board_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Edit a comment; author only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: UserId,
        board_id: BoardId,
        comment_id: CommentId,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.load_for_change(user_id, board_id, comment_id).await?;

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");
        Ok(CommentResponse::from(comment))
    }

    /// Soft-delete a comment; author only
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        user_id: UserId,
        board_id: BoardId,
        comment_id: CommentId,
    ) -> ServiceResult<()> {
        self.load_for_change(user_id, board_id, comment_id).await?;
        self.ctx.comment_repo().soft_delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    async fn load_for_change(
        &self,
        user_id: UserId,
        board_id: BoardId,
        comment_id: CommentId,
    ) -> ServiceResult<Comment> {
        let board = self
            .ctx
            .board_repo()
            .find_including_deleted(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;
        let comment = self
            .ctx
            .comment_repo()
            .find_including_deleted(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if board.is_deleted() {
            return Err(DomainError::BoardDeleted(board_id).into());
        }
        if comment.is_deleted() {
            return Err(DomainError::CommentDeleted(comment_id).into());
        }
        if !comment.belongs_to(board_id) {
            return Err(DomainError::CommentNotInBoard {
                comment: comment_id,
                board: board_id,
            }
            .into());
        }
        ensure_owner(&comment, user_id)?;

        Ok(comment)
    }
}
