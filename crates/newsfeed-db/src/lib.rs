//! # newsfeed-db
//!
//! Database layer implementing the repository traits of `newsfeed-core`
//! with PostgreSQL via SQLx.
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the transactional cascades
//!
//! ## Usage
//!
//! ```rust,ignore
//! use newsfeed_db::{create_pool, run_migrations, PgBoardRepository, PoolConfig};
//!
//! async fn example(config: &newsfeed_common::DatabaseConfig) -> anyhow::Result<()> {
//!     let pool = create_pool(&PoolConfig::from(config)).await?;
//!     run_migrations(&pool, &config.migrations_dir).await?;
//!     let boards = PgBoardRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgBoardRepository, PgCommentRepository, PgLikeRepository, PgUserRepository,
};
