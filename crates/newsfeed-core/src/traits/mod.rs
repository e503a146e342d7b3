//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BoardRepository, CommentRepository, LikeRepository, RepoResult, UserRepository,
    WithdrawalSummary,
};
