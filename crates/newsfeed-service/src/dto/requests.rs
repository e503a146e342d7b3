//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// Usernames are lowercase ASCII letters and digits
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(ValidationError::new("username_charset")
            .with_message("Username may only contain lowercase letters and digits".into()))
    }
}

/// Blank profile fields mean "keep the current value" and skip format checks
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate_optional_nickname(nickname: &str) -> Result<(), ValidationError> {
    if is_blank(nickname) || nickname.trim().chars().count() <= 30 {
        Ok(())
    } else {
        Err(ValidationError::new("length")
            .with_message("Nickname must be at most 30 characters".into()))
    }
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) || email.trim().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email format".into()))
    }
}

fn validate_optional_info(info: &str) -> Result<(), ValidationError> {
    if is_blank(info) || info.trim().chars().count() <= 500 {
        Ok(())
    } else {
        Err(ValidationError::new("length")
            .with_message("Info must be at most 500 characters".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-up request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(
        length(min = 4, max = 20, message = "Username must be 4-20 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 500, message = "Info must be at most 500 characters"))]
    pub info: Option<String>,

    /// Strength rules are checked by the service
    #[validate(length(max = 72, message = "Password must be at most 72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Access token reissue request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReissueRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update; blank or missing fields keep their current value
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "validate_optional_nickname"))]
    pub nickname: Option<String>,

    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_optional_info"))]
    pub info: Option<String>,

    /// Current password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,

    #[validate(length(max = 72, message = "Password must be at most 72 characters"))]
    pub new_password: String,
}

/// Account withdrawal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignOutRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Board Requests
// ============================================================================

/// Create or edit a board
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BoardRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

/// Creation-date window for board lists, both ends `YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeQuery {
    #[serde(alias = "startTime")]
    pub start_time: String,

    #[serde(alias = "endTime")]
    pub end_time: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create or edit a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}
