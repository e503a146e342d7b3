//! User handlers
//!
//! Sign-up and the account routes, which only act on the caller's account.

use axum::{
    extract::{Path, State},
    Json,
};
use newsfeed_service::dto::{
    ChangePasswordRequest, ProfileResponse, SignOutRequest, SignUpRequest, SignUpResponse,
    UpdateProfileRequest, WithdrawalResponse,
};
use newsfeed_service::UserService;

use crate::extractors::{AuthUser, UserPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new account
///
/// POST /users/signup
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignUpRequest>,
) -> ApiResult<Created<Json<SignUpResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.sign_up(request).await?;
    Ok(Created(Json(response)))
}

/// GET /users/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserPath>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(path.user_id()?, auth.user_id).await?;
    Ok(Json(response))
}

/// PUT /users/{user_id}
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserPath>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .update_profile(path.user_id()?, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// PUT /users/{user_id}/password
pub async fn update_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserPath>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service
        .update_password(path.user_id()?, auth.user_id, request)
        .await?;
    Ok(NoContent)
}

/// Withdraw the account
///
/// PUT /users/{user_id}/signout
pub async fn sign_out(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserPath>,
    ValidatedJson(request): ValidatedJson<SignOutRequest>,
) -> ApiResult<Json<WithdrawalResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .sign_out(path.user_id()?, auth.user_id, request)
        .await?;
    Ok(Json(response))
}
