//! # newsfeed-core
//!
//! Domain layer containing entities, value objects, the ownership policy and
//! repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Board, Comment, ContentType, Like, NewBoard, NewComment, NewUser, ProfileChanges, User,
    UserStatus,
};
pub use error::DomainError;
pub use policy::{authorize, ensure_owner, ensure_same_user, Owned};
pub use traits::{
    BoardRepository, CommentRepository, LikeRepository, RepoResult, UserRepository,
    WithdrawalSummary,
};
pub use value_objects::{
    BoardId, BoardQuery, BoardSort, CommentId, DateRange, IdParseError, PageRequest, UserId,
    PAGE_SIZE,
};
