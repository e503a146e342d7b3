//! Like handlers
//!
//! POST adds the caller's like, DELETE removes it. Both return the
//! target's updated like count.

use axum::{
    extract::{Path, State},
    Json,
};
use newsfeed_service::dto::LikeResponse;
use newsfeed_service::LikeService;

use crate::extractors::{AuthUser, BoardPath, CommentPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /boards/{board_id}/likes
pub async fn like_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardPath>,
) -> ApiResult<Created<Json<LikeResponse>>> {
    let service = LikeService::new(state.service_context());
    let response = service.like_board(auth.user_id, path.board_id()?).await?;
    Ok(Created(Json(response)))
}

/// DELETE /boards/{board_id}/likes
pub async fn unlike_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.unlike_board(auth.user_id, path.board_id()?).await?;
    Ok(Json(response))
}

/// POST /boards/{board_id}/comments/{comment_id}/likes
pub async fn like_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<Created<Json<LikeResponse>>> {
    let service = LikeService::new(state.service_context());
    let response = service
        .like_comment(auth.user_id, path.board_id()?, path.comment_id()?)
        .await?;
    Ok(Created(Json(response)))
}

/// DELETE /boards/{board_id}/comments/{comment_id}/likes
pub async fn unlike_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service
        .unlike_comment(auth.user_id, path.board_id()?, path.comment_id()?)
        .await?;
    Ok(Json(response))
}
