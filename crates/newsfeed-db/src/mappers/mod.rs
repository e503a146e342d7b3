//! Model → entity mappers

mod board;
mod comment;
mod user;
