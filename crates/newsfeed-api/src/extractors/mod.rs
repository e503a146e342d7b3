//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path/query parsing.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::{BoardPath, CommentPath, PagePath, UserPath};
pub use query::ValidQuery;
pub use validated::ValidatedJson;
