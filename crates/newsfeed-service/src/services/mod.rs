//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for one request and
//! orchestrates repository calls, guards, and DTO mapping.

pub mod auth;
pub mod board;
pub mod comment;
pub mod context;
pub mod error;
pub mod like;
pub mod user;

pub use auth::AuthService;
pub use board::BoardService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
pub use user::UserService;
