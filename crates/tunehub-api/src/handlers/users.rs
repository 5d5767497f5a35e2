//! User handlers
//!
//! The chat sidebar: other users and the conversation with one of them.

use axum::{
    extract::{Path, State},
    Json,
};
use tunehub_service::{MessageResponse, MessageService, UserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Every user except the caller
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_others(&auth.external_id).await?;
    Ok(Json(users))
}

/// Messages between the caller and `user_id`, oldest first
///
/// GET /users/messages/{user_id}
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.conversation(&auth.external_id, &user_id).await?;
    Ok(Json(messages))
}
