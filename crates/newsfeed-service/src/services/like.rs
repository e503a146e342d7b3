//! Like service
//!
//! A user may like each board or comment once, never their own. Likes are
//! rows in the like table; the target's `like_count` moves with them.

use newsfeed_core::entities::{Comment, ContentType, Like};
use newsfeed_core::{BoardId, CommentId, DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn like_board(&self, user_id: UserId, board_id: BoardId) -> ServiceResult<LikeResponse> {
        let board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;
        if board.user_id == user_id {
            return Err(DomainError::SelfLike.into());
        }

        self.add(Like::board(user_id, board_id)).await?;
        info!(board_id = %board_id, "Board liked");

        self.board_state(board_id, true).await
    }

    #[instrument(skip(self))]
    pub async fn unlike_board(&self, user_id: UserId, board_id: BoardId) -> ServiceResult<LikeResponse> {
        self.ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        self.remove(user_id, ContentType::Board, board_id.into_inner())
            .await?;
        info!(board_id = %board_id, "Board unliked");

        self.board_state(board_id, false).await
    }

    #[instrument(skip(self))]
    pub async fn like_comment(
        &self,
        user_id: UserId,
        board_id: BoardId,
        comment_id: CommentId,
    ) -> ServiceResult<LikeResponse> {
        let comment = self.visible_comment(board_id, comment_id).await?;
        if comment.user_id == user_id {
            return Err(DomainError::SelfLike.into());
        }

        self.add(Like::comment(user_id, comment_id)).await?;
        info!(comment_id = %comment_id, "Comment liked");

        self.comment_state(comment_id, true).await
    }

    #[instrument(skip(self))]
    pub async fn unlike_comment(
        &self,
        user_id: UserId,
        board_id: BoardId,
        comment_id: CommentId,
    ) -> ServiceResult<LikeResponse> {
        self.visible_comment(board_id, comment_id).await?;

        self.remove(user_id, ContentType::Comment, comment_id.into_inner())
            .await?;
        info!(comment_id = %comment_id, "Comment unliked");

        self.comment_state(comment_id, false).await
    }

    /// A visible comment under a visible board
    async fn visible_comment(&self, board_id: BoardId, comment_id: CommentId) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.belongs_to(board_id) {
            return Err(DomainError::CommentNotInBoard {
                comment: comment_id,
                board: board_id,
            }
            .into());
        }

        Ok(comment)
    }

    async fn add(&self, like: Like) -> ServiceResult<()> {
        let repo = self.ctx.like_repo();
        if repo
            .exists(like.user_id, like.content_type, like.content_id)
            .await?
        {
            return Err(DomainError::AlreadyLiked.into());
        }

        // The unique key still rejects a concurrent duplicate
        repo.like(&like).await?;
        Ok(())
    }

    async fn remove(&self, user_id: UserId, content_type: ContentType, content_id: i64) -> ServiceResult<()> {
        if self
            .ctx
            .like_repo()
            .unlike(user_id, content_type, content_id)
            .await?
        {
            Ok(())
        } else {
            Err(DomainError::LikeNotFound.into())
        }
    }

    async fn board_state(&self, board_id: BoardId, liked: bool) -> ServiceResult<LikeResponse> {
        let board = self
            .ctx
            .board_repo()
            .find_by_id(board_id)
            .await?
            .ok_or(DomainError::BoardNotFound(board_id))?;

        Ok(LikeResponse {
            content_type: ContentType::Board.as_str(),
            content_id: board_id.into_inner(),
            liked,
            like_count: board.like_count,
        })
    }

    async fn comment_state(&self, comment_id: CommentId, liked: bool) -> ServiceResult<LikeResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        Ok(LikeResponse {
            content_type: ContentType::Comment.as_str(),
            content_id: comment_id.into_inner(),
            liked,
            like_count: comment.like_count,
        })
    }
}
