//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use newsfeed_common::auth::TokenPair;
use newsfeed_core::entities::{Board, Comment, User};
use newsfeed_core::traits::WithdrawalSummary;

use super::responses::{
    BoardResponse, CommentResponse, ProfileResponse, TokenResponse, WithdrawalResponse,
};

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.into_inner(),
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            info: user.info.clone(),
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            board_id: board.id.into_inner(),
            user_id: board.user_id.into_inner(),
            title: board.title.clone(),
            content: board.content.clone(),
            hits: board.hits,
            like_count: board.like_count,
            created_at: board.created_at,
            modified_at: board.modified_at,
        }
    }
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            comment_id: comment.id.into_inner(),
            board_id: comment.board_id.into_inner(),
            user_id: comment.user_id.into_inner(),
            content: comment.content.clone(),
            like_count: comment.like_count,
            created_at: comment.created_at,
            modified_at: comment.modified_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        }
    }
}

impl From<WithdrawalSummary> for WithdrawalResponse {
    fn from(summary: WithdrawalSummary) -> Self {
        Self {
            deleted_boards: summary.boards,
            deleted_comments: summary.comments,
        }
    }
}
