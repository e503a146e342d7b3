//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use newsfeed_service::dto::{CommentRequest, CommentResponse};
use newsfeed_service::CommentService;

use crate::extractors::{AuthUser, BoardPath, CommentPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /boards/{board_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(path): Path<BoardPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    Ok(Json(service.list(path.board_id()?).await?))
}

/// POST /boards/{board_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardPath>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.add(auth.user_id, path.board_id()?, request).await?;
    Ok(Created(Json(response)))
}

/// PUT /boards/{board_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .update(auth.user_id, path.board_id()?, path.comment_id()?, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /boards/{board_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service
        .delete(auth.user_id, path.board_id()?, path.comment_id()?)
        .await?;
    Ok(NoContent)
}
