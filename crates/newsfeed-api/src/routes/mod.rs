//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, boards, comments, health, likes, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(board_routes())
        .merge(comment_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/reissue", post(auth::reissue))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(users::sign_up))
        .route(
            "/users/:user_id",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/users/:user_id/password", put(users::update_password))
        .route("/users/:user_id/signout", put(users::sign_out))
}

/// Board routes
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/boards", get(boards::list_boards).post(boards::create_board))
        .route("/boards/recently/:page", get(boards::list_recent))
        .route("/boards/like/:page", get(boards::list_most_liked))
        .route("/boards/date/:page", get(boards::list_by_date))
        .route(
            "/boards/:board_id",
            get(boards::get_board)
                .put(boards::update_board)
                .delete(boards::delete_board),
        )
        .route(
            "/boards/:board_id/likes",
            post(likes::like_board).delete(likes::unlike_board),
        )
}

/// Comment routes, nested under their board
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/boards/:board_id/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/boards/:board_id/comments/:comment_id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/boards/:board_id/comments/:comment_id/likes",
            post(likes::like_comment).delete(likes::unlike_comment),
        )
}
