//! Service context - dependency container for services
//!
//! Holds the repositories and auth helpers needed by services.

use std::sync::Arc;

use newsfeed_common::auth::{JwtService, PasswordService};
use newsfeed_core::traits::{BoardRepository, CommentRepository, LikeRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects so services run unchanged against
/// PostgreSQL or an in-memory store.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    board_repo: Arc<dyn BoardRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,

    // Auth
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the board repository
    pub fn board_repo(&self) -> &dyn BoardRepository {
        self.board_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    // === Auth ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    board_repo: Option<Arc<dyn BoardRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn board_repo(mut self, repo: Arc<dyn BoardRepository>) -> Self {
        self.board_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the context, failing if a dependency was not provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            board_repo: self.board_repo.ok_or_else(|| missing("board_repo"))?,
            comment_repo: self.comment_repo.ok_or_else(|| missing("comment_repo"))?,
            like_repo: self.like_repo.ok_or_else(|| missing("like_repo"))?,
            jwt_service: self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
            password_service: PasswordService::new(),
        })
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::internal(format!("ServiceContext is missing {dependency}"))
}
