//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `comments` table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
