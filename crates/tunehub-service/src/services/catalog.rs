//! Catalog service
//!
//! Songs and albums: public browsing plus the admin create/delete operations.

use tracing::{info, instrument};
use tunehub_core::entities::{Album, Song};
use tunehub_core::{DomainError, Snowflake};
use validator::Validate;

use crate::dto::{
    AlbumResponse, AlbumWithSongsResponse, CreateAlbumRequest, CreateSongRequest, SongResponse,
    SongSummaryResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const FEATURED_COUNT: i64 = 6;
const MADE_FOR_YOU_COUNT: i64 = 4;
const TRENDING_COUNT: i64 = 4;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Songs
    // ========================================================================

    /// All songs, newest first
    #[instrument(skip(self))]
    pub async fn list_songs(&self) -> ServiceResult<Vec<SongResponse>> {
        let songs = self.ctx.song_repo().list_all().await?;
        Ok(songs.into_iter().map(SongResponse::from).collect())
    }

    pub async fn featured_songs(&self) -> ServiceResult<Vec<SongSummaryResponse>> {
        self.sample(FEATURED_COUNT).await
    }

    pub async fn made_for_you_songs(&self) -> ServiceResult<Vec<SongSummaryResponse>> {
        self.sample(MADE_FOR_YOU_COUNT).await
    }

    // TODO: rank by play counts once playback events are recorded
    pub async fn trending_songs(&self) -> ServiceResult<Vec<SongSummaryResponse>> {
        self.sample(TRENDING_COUNT).await
    }

    #[instrument(skip(self))]
    async fn sample(&self, limit: i64) -> ServiceResult<Vec<SongSummaryResponse>> {
        let songs = self.ctx.song_repo().sample(limit).await?;
        Ok(songs.into_iter().map(SongSummaryResponse::from).collect())
    }

    /// Create a song, attaching it to an album when one is given
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_song(&self, request: CreateSongRequest) -> ServiceResult<SongResponse> {
        request.validate()?;

        let album_id = match request.album_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let id = Snowflake::parse(raw)
                    .map_err(|_| ServiceError::validation("albumId is not a valid ID"))?;
                if self.ctx.album_repo().find_by_id(id).await?.is_none() {
                    return Err(DomainError::AlbumNotFound(id).into());
                }
                Some(id)
            }
        };

        let song = Song::new(
            self.ctx.generate_id(),
            request.title,
            request.artist,
            request.image_url,
            request.audio_url,
            request.duration,
            album_id,
        );
        self.ctx.song_repo().create(&song).await?;

        info!(song_id = %song.id, album_id = ?song.album_id, "Song created");
        Ok(SongResponse::from(song))
    }

    /// Delete a song; its album simply loses the track
    #[instrument(skip(self))]
    pub async fn delete_song(&self, id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.song_repo().delete(id).await? {
            return Err(DomainError::SongNotFound(id).into());
        }
        info!(song_id = %id, "Song deleted");
        Ok(())
    }

    // ========================================================================
    // Albums
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn list_albums(&self) -> ServiceResult<Vec<AlbumResponse>> {
        let albums = self.ctx.album_repo().list_all().await?;
        Ok(albums.into_iter().map(AlbumResponse::from).collect())
    }

    /// Album together with its songs in track order
    #[instrument(skip(self))]
    pub async fn get_album(&self, id: Snowflake) -> ServiceResult<AlbumWithSongsResponse> {
        let album = self
            .ctx
            .album_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AlbumNotFound(id))?;
        let songs = self.ctx.song_repo().find_by_album(id).await?;

        Ok(AlbumWithSongsResponse::new(album, songs))
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_album(&self, request: CreateAlbumRequest) -> ServiceResult<AlbumResponse> {
        request.validate()?;

        let album = Album::new(
            self.ctx.generate_id(),
            request.title,
            request.artist,
            request.image_url,
            request.release_year,
        );
        self.ctx.album_repo().create(&album).await?;

        info!(album_id = %album.id, "Album created");
        Ok(AlbumResponse::from(album))
    }

    /// Delete an album together with all of its songs
    #[instrument(skip(self))]
    pub async fn delete_album(&self, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.album_repo().find_by_id(id).await?.is_none() {
            return Err(DomainError::AlbumNotFound(id).into());
        }

        let removed = self.ctx.song_repo().delete_by_album(id).await?;
        self.ctx.album_repo().delete(id).await?;

        info!(album_id = %id, songs_removed = removed, "Album deleted");
        Ok(())
    }
}
