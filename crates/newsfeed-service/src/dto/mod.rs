//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BoardRequest, ChangePasswordRequest, CommentRequest, DateRangeQuery, LoginRequest,
    ReissueRequest, SignOutRequest, SignUpRequest, UpdateProfileRequest,
};

pub use responses::{
    BoardListResponse, BoardResponse, CommentResponse, HealthChecks, HealthResponse,
    LikeResponse, ProfileResponse, ReadinessResponse, SignUpResponse, TokenResponse,
    WithdrawalResponse,
};
