//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod boards;
pub mod comments;
pub mod health;
pub mod likes;
pub mod users;
