//! Authentication handlers
//!
//! Endpoints for login, token reissue, and logout.

use axum::{extract::State, Json};
use newsfeed_service::dto::{LoginRequest, ReissueRequest, TokenResponse};
use newsfeed_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new token pair
///
/// POST /auth/reissue
pub async fn reissue(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReissueRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.reissue(request).await?;
    Ok(Json(response))
}

/// Logout the current session
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.user_id).await?;
    Ok(NoContent)
}
