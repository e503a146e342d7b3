//! Board handlers
//!
//! Board CRUD and the paginated feeds.

use axum::{
    extract::{Path, State},
    Json,
};
use newsfeed_service::dto::{BoardListResponse, BoardRequest, BoardResponse, DateRangeQuery};
use newsfeed_service::BoardService;

use crate::extractors::{AuthUser, BoardPath, PagePath, ValidQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /boards
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BoardRequest>,
) -> ApiResult<Created<Json<BoardResponse>>> {
    let service = BoardService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Read a board and count the view
///
/// GET /boards/{board_id}
pub async fn get_board(
    State(state): State<AppState>,
    Path(path): Path<BoardPath>,
) -> ApiResult<Json<BoardResponse>> {
    let service = BoardService::new(state.service_context());
    let response = service.get(path.board_id()?).await?;
    Ok(Json(response))
}

/// PUT /boards/{board_id}
pub async fn update_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardPath>,
    ValidatedJson(request): ValidatedJson<BoardRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let service = BoardService::new(state.service_context());
    let response = service
        .update(auth.user_id, path.board_id()?, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /boards/{board_id}
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardPath>,
) -> ApiResult<NoContent> {
    let service = BoardService::new(state.service_context());
    service.delete(auth.user_id, path.board_id()?).await?;
    Ok(NoContent)
}

/// GET /boards
pub async fn list_boards(State(state): State<AppState>) -> ApiResult<Json<BoardListResponse>> {
    let service = BoardService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// GET /boards/recently/{page}
pub async fn list_recent(
    State(state): State<AppState>,
    Path(path): Path<PagePath>,
) -> ApiResult<Json<BoardListResponse>> {
    let service = BoardService::new(state.service_context());
    Ok(Json(service.list_recent(path.page()?).await?))
}

/// GET /boards/like/{page}
pub async fn list_most_liked(
    State(state): State<AppState>,
    Path(path): Path<PagePath>,
) -> ApiResult<Json<BoardListResponse>> {
    let service = BoardService::new(state.service_context());
    Ok(Json(service.list_most_liked(path.page()?).await?))
}

/// GET /boards/date/{page}?start_time=YYYY-MM-DD&end_time=YYYY-MM-DD
pub async fn list_by_date(
    State(state): State<AppState>,
    Path(path): Path<PagePath>,
    ValidQuery(range): ValidQuery<DateRangeQuery>,
) -> ApiResult<Json<BoardListResponse>> {
    let service = BoardService::new(state.service_context());
    Ok(Json(service.list_by_date(path.page()?, range).await?))
}
