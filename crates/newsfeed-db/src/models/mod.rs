//! Database models - rows as SQLx reads them

mod board;
mod comment;
mod user;

pub use board::BoardModel;
pub use comment::CommentModel;
pub use user::UserModel;
