//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in newsfeed-core.
//! Every read filters out soft-deleted rows unless its name says otherwise.

mod board;
mod comment;
mod error;
mod like;
mod user;

pub use board::PgBoardRepository;
pub use comment::PgCommentRepository;
pub use like::PgLikeRepository;
pub use user::PgUserRepository;
