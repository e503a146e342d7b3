//! Comment entity - a reply attached to a board

use chrono::{DateTime, Utc};

use crate::policy::Owned;
use crate::value_objects::{BoardId, CommentId, UserId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub board_id: BoardId,
    pub user_id: UserId,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the comment was posted on the given board
    #[inline]
    pub fn belongs_to(&self, board_id: BoardId) -> bool {
        self.board_id == board_id
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.modified_at = Utc::now();
    }

    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Fields needed to post a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub board_id: BoardId,
    pub user_id: UserId,
    pub content: String,
}
