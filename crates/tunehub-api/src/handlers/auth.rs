//! Authentication handlers
//!
//! Sign-in happens at the identity provider; the frontend reports each
//! signed-in user here so a local profile exists.

use axum::{extract::State, Json};
use tunehub_service::{AuthCallbackRequest, SuccessResponse, UserService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Create the local user on first sign-in
///
/// POST /auth/callback
pub async fn callback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AuthCallbackRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = UserService::new(state.service_context());
    let created = service.sync_from_callback(request).await?;
    tracing::debug!(created, "Auth callback handled");
    Ok(Json(SuccessResponse::ok()))
}
