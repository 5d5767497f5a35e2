//! Album handlers

use axum::{extract::State, Json};
use tunehub_service::{AlbumResponse, AlbumWithSongsResponse, CatalogService};

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /albums
pub async fn list_albums(State(state): State<AppState>) -> ApiResult<Json<Vec<AlbumResponse>>> {
    let albums = CatalogService::new(state.service_context())
        .list_albums()
        .await?;
    Ok(Json(albums))
}

/// Album with its tracks
///
/// GET /albums/{album_id}
pub async fn get_album(
    State(state): State<AppState>,
    IdPath(album_id): IdPath,
) -> ApiResult<Json<AlbumWithSongsResponse>> {
    let album = CatalogService::new(state.service_context())
        .get_album(album_id)
        .await?;
    Ok(Json(album))
}
