//! Domain entities - core business objects

mod board;
mod comment;
mod like;
mod user;

pub use board::{Board, NewBoard};
pub use comment::{Comment, NewComment};
pub use like::{ContentType, Like};
pub use user::{NewUser, ProfileChanges, User, UserStatus};
