//! Value objects - immutable types that represent domain concepts

mod ids;
mod paging;

pub use ids::{BoardId, CommentId, IdParseError, UserId};
pub use paging::{BoardQuery, BoardSort, DateRange, PageRequest, PAGE_SIZE};
