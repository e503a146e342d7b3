//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{BoardId, CommentId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Board not found: {0}")]
    BoardNotFound(BoardId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Like not found")]
    LikeNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Cannot like your own content")]
    SelfLike,

    // =========================================================================
    // State Errors (the target exists but is no longer usable)
    // =========================================================================
    #[error("Board has already been deleted: {0}")]
    BoardDeleted(BoardId),

    #[error("Comment has already been deleted: {0}")]
    CommentDeleted(CommentId),

    #[error("Comment {comment} does not belong to board {board}")]
    CommentNotInBoard { comment: CommentId, board: BoardId },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author can modify this resource")]
    NotOwner,

    #[error("Acting user does not match the requested account")]
    IdentityMismatch,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Nickname already in use")]
    NicknameAlreadyExists,

    #[error("Content already liked")]
    AlreadyLiked,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BoardNotFound(_) => "UNKNOWN_BOARD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::LikeNotFound => "UNKNOWN_LIKE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::SelfLike => "SELF_LIKE",

            // State
            Self::BoardDeleted(_) => "BOARD_DELETED",
            Self::CommentDeleted(_) => "COMMENT_DELETED",
            Self::CommentNotInBoard { .. } => "COMMENT_NOT_IN_BOARD",

            // Authorization
            Self::NotOwner => "PERMISSION_DENIED",
            Self::IdentityMismatch => "IDENTITY_MISMATCH",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::NicknameAlreadyExists => "NICKNAME_ALREADY_EXISTS",
            Self::AlreadyLiked => "ALREADY_LIKED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BoardNotFound(_)
                | Self::CommentNotFound(_)
                | Self::LikeNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::WeakPassword(_) | Self::SelfLike
        )
    }

    /// Check if the target is in a state that forbids the operation
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::BoardDeleted(_) | Self::CommentDeleted(_) | Self::CommentNotInBoard { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotOwner | Self::IdentityMismatch)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::EmailAlreadyExists
                | Self::NicknameAlreadyExists
                | Self::AlreadyLiked
        )
    }
}
