//! Board entity - a post in the feed

use chrono::{DateTime, Utc};

use crate::policy::Owned;
use crate::value_objects::{BoardId, UserId};

/// Board entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: BoardId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    /// Number of successful single-board reads
    pub hits: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Check if the board has been soft-deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Overwrite title and content
    pub fn edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.modified_at = Utc::now();
    }

    /// Count one more read
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn soft_delete(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
    }
}

impl Owned for Board {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// Fields needed to publish a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}
