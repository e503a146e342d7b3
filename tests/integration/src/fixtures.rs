//! Test fixtures and data generators

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

pub const TEST_PASSWORD: &str = "TestPass123!";

/// Get a unique suffix for test data
///
/// Mixed with the process id so reruns against the same database don't collide.
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}{n}", std::process::id() % 100_000)
}

#[derive(Debug, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub info: Option<String>,
    pub password: String,
}

impl SignUpRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("tester{suffix}"),
            nickname: format!("Tester {suffix}"),
            email: format!("tester{suffix}@example.com"),
            info: Some("integration test account".to_string()),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_sign_up(req: &SignUpRequest) -> Self {
        Self {
            username: req.username.clone(),
            password: req.password.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReissueRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct PasswordRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct BoardRequest {
    pub title: String,
    pub content: String,
}

impl BoardRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Post {}", unique_suffix()),
            content: "Hello from the integration tests".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardResponse {
    pub board_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub hits: i64,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct BoardListResponse {
    pub boards: Vec<BoardResponse>,
    pub page: Option<u32>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct LikeResponse {
    pub content_type: String,
    pub content_id: i64,
    pub liked: bool,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawalResponse {
    pub deleted_boards: u64,
    pub deleted_comments: u64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
