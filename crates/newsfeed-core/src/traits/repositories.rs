//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Reads never return soft-deleted rows unless
//! the method name says `including_deleted`. Methods documented as
//! transactional change several rows and must commit all of them or none.

use async_trait::async_trait;

use crate::entities::{Board, Comment, ContentType, Like, NewBoard, NewComment, NewUser, User};
use crate::error::DomainError;
use crate::value_objects::{BoardId, BoardQuery, CommentId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Rows soft-deleted together with a withdrawn account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithdrawalSummary {
    pub boards: u64,
    pub comments: u64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find an active user by login name
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find the active user holding this refresh token
    async fn find_by_refresh_token(&self, token: &str) -> RepoResult<Option<User>>;

    /// Check if a username is taken (withdrawn accounts keep theirs)
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a nickname is taken
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool>;

    /// Create a new active user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Persist nickname, email and info
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: UserId, password_hash: &str) -> RepoResult<()>;

    /// Store the login session state
    async fn update_session(
        &self,
        id: UserId,
        refresh_token: Option<&str>,
        expired: bool,
    ) -> RepoResult<()>;

    /// Transactional: soft-delete every visible board and comment written by
    /// the user, then mark the user DELETED and expired.
    async fn withdraw(&self, id: UserId) -> RepoResult<WithdrawalSummary>;
}

// ============================================================================
// Board Repository
// ============================================================================

#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Find a visible board
    async fn find_by_id(&self, id: BoardId) -> RepoResult<Option<Board>>;

    /// Find a board whether or not it has been soft-deleted
    async fn find_including_deleted(&self, id: BoardId) -> RepoResult<Option<Board>>;

    /// List visible boards
    async fn list(&self, query: &BoardQuery) -> RepoResult<Vec<Board>>;

    /// Create a new board with zero hits and likes
    async fn create(&self, board: &NewBoard) -> RepoResult<Board>;

    /// Persist title, content and modification time
    async fn update(&self, board: &Board) -> RepoResult<()>;

    /// Increment hits of a visible board and return it.
    /// `None` if the board is absent or deleted.
    async fn record_hit(&self, id: BoardId) -> RepoResult<Option<Board>>;

    /// Transactional: soft-delete the board and every comment on it that is
    /// not deleted yet. Returns the number of comments cascaded.
    async fn soft_delete_cascade(&self, id: BoardId) -> RepoResult<u64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a visible comment on a visible board
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Find a comment whether or not it has been soft-deleted
    async fn find_including_deleted(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// List visible comments of a board, newest first
    async fn list_by_board(&self, board_id: BoardId) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Persist content and modification time
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Soft delete a comment
    async fn soft_delete(&self, id: CommentId) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Check if the user already likes the content
    async fn exists(
        &self,
        user_id: UserId,
        content_type: ContentType,
        content_id: i64,
    ) -> RepoResult<bool>;

    /// Transactional: record the like and increment the target's like count.
    /// Fails with `AlreadyLiked` if the like exists.
    async fn like(&self, like: &Like) -> RepoResult<()>;

    /// Transactional: remove the like and decrement the target's like count.
    /// Returns false if there was no like to remove.
    async fn unlike(
        &self,
        user_id: UserId,
        content_type: ContentType,
        content_id: i64,
    ) -> RepoResult<bool>;
}
