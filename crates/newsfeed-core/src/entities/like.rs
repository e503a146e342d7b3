//! Like entity - a user's endorsement of a board or comment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BoardId, CommentId, UserId};

/// Kind of content a like points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Board,
    Comment,
}

impl ContentType {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Board => "BOARD",
            Self::Comment => "COMMENT",
        }
    }

    /// Parse the stored representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BOARD" => Some(Self::Board),
            "COMMENT" => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Like entity. Unique per (user, content id, content type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id: UserId,
    pub content_id: i64,
    pub content_type: ContentType,
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Like on a board
    pub fn board(user_id: UserId, board_id: BoardId) -> Self {
        Self::new(user_id, board_id.into_inner(), ContentType::Board)
    }

    /// Like on a comment
    pub fn comment(user_id: UserId, comment_id: CommentId) -> Self {
        Self::new(user_id, comment_id.into_inner(), ContentType::Comment)
    }

    fn new(user_id: UserId, content_id: i64, content_type: ContentType) -> Self {
        Self {
            user_id,
            content_id,
            content_type,
            created_at: Utc::now(),
        }
    }
}
