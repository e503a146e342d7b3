//! Path parameter extractors
//!
//! Ids arrive as strings and must parse as positive integers.

use newsfeed_core::{BoardId, CommentId, UserId};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserPath {
    pub user_id: String,
}

impl UserPath {
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with board_id
#[derive(Debug, Deserialize)]
pub struct BoardPath {
    pub board_id: String,
}

impl BoardPath {
    pub fn board_id(&self) -> Result<BoardId, ApiError> {
        parse_board_id(&self.board_id)
    }
}

/// Path parameters with board_id and comment_id
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub board_id: String,
    pub comment_id: String,
}

impl CommentPath {
    pub fn board_id(&self) -> Result<BoardId, ApiError> {
        parse_board_id(&self.board_id)
    }

    pub fn comment_id(&self) -> Result<CommentId, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

/// 1-based page number of a board feed
#[derive(Debug, Deserialize)]
pub struct PagePath {
    pub page: String,
}

impl PagePath {
    /// Range checks happen in the service
    pub fn page(&self) -> Result<i64, ApiError> {
        self.page
            .parse()
            .map_err(|_| ApiError::invalid_path("Page must be an integer"))
    }
}

fn parse_board_id(raw: &str) -> Result<BoardId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid board_id format"))
}
