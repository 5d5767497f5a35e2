//! Song handlers

use axum::{extract::State, Json};
use tunehub_service::{CatalogService, SongResponse, SongSummaryResponse};

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Full song list, newest first
///
/// GET /songs
pub async fn list_songs(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<SongResponse>>> {
    let songs = CatalogService::new(state.service_context()).list_songs().await?;
    Ok(Json(songs))
}

/// GET /songs/featured
pub async fn featured_songs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SongSummaryResponse>>> {
    let songs = CatalogService::new(state.service_context())
        .featured_songs()
        .await?;
    Ok(Json(songs))
}

/// GET /songs/made-for-you
pub async fn made_for_you_songs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SongSummaryResponse>>> {
    let songs = CatalogService::new(state.service_context())
        .made_for_you_songs()
        .await?;
    Ok(Json(songs))
}

/// GET /songs/trending
pub async fn trending_songs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SongSummaryResponse>>> {
    let songs = CatalogService::new(state.service_context())
        .trending_songs()
        .await?;
    Ok(Json(songs))
}
