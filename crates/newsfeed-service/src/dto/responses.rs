//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Issued token pair
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub user_id: i64,
}

/// Public profile of an account
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Content removed together with a withdrawn account
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalResponse {
    pub deleted_boards: u64,
    pub deleted_comments: u64,
}

// ============================================================================
// Board Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub board_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub hits: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// One page (or all) of boards
#[derive(Debug, Clone, Serialize)]
pub struct BoardListResponse {
    pub boards: Vec<BoardResponse>,
    /// 1-based page number, absent for unpaginated lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Shown instead of an empty feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BoardListResponse {
    pub const EMPTY_FEED_MESSAGE: &'static str = "No posts yet. Be the first to write one!";

    pub fn new(boards: Vec<BoardResponse>, page: Option<u32>) -> Self {
        let message = boards
            .is_empty()
            .then(|| Self::EMPTY_FEED_MESSAGE.to_string());
        Self {
            boards,
            page,
            message,
        }
    }
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

// ============================================================================
// Like Responses
// ============================================================================

/// Like state of a board or comment after a like/unlike
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub content_type: &'static str,
    pub content_id: i64,
    pub liked: bool,
    pub like_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
