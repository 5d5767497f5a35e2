//! Admin handlers
//!
//! Catalog management. Every route here requires an [`AdminUser`].

use axum::{extract::State, Json};
use tunehub_service::{
    AdminCheckResponse, AlbumResponse, CatalogService, CreateAlbumRequest, CreateSongRequest,
    SongResponse,
};

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Lets the frontend decide whether to show the dashboard
///
/// GET /admin/check
pub async fn check_admin(_admin: AdminUser) -> Json<AdminCheckResponse> {
    Json(AdminCheckResponse { admin: true })
}

/// POST /admin/songs
pub async fn create_song(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ValidatedJson(request): ValidatedJson<CreateSongRequest>,
) -> ApiResult<Created<Json<SongResponse>>> {
    let song = CatalogService::new(state.service_context())
        .create_song(request)
        .await?;
    tracing::info!(song_id = %song.id, admin = %admin.external_id, "Song created");
    Ok(Created(Json(song)))
}

/// DELETE /admin/songs/{id}
pub async fn delete_song(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(song_id): IdPath,
) -> ApiResult<NoContent> {
    CatalogService::new(state.service_context())
        .delete_song(song_id)
        .await?;
    Ok(NoContent)
}

/// POST /admin/albums
pub async fn create_album(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ValidatedJson(request): ValidatedJson<CreateAlbumRequest>,
) -> ApiResult<Created<Json<AlbumResponse>>> {
    let album = CatalogService::new(state.service_context())
        .create_album(request)
        .await?;
    tracing::info!(album_id = %album.id, admin = %admin.external_id, "Album created");
    Ok(Created(Json(album)))
}

/// Delete an album together with its songs
///
/// DELETE /admin/albums/{id}
pub async fn delete_album(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(album_id): IdPath,
) -> ApiResult<NoContent> {
    CatalogService::new(state.service_context())
        .delete_album(album_id)
        .await?;
    Ok(NoContent)
}
