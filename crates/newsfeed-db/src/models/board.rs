//! Board database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `boards` table
#[derive(Debug, Clone, FromRow)]
pub struct BoardModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub hits: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

