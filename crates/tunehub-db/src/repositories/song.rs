//! PostgreSQL implementation of SongRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tunehub_core::entities::Song;
use tunehub_core::traits::{RepoResult, SongRepository};
use tunehub_core::value_objects::Snowflake;

use crate::models::SongModel;

use super::error::map_db_error;

const SONG_COLUMNS: &str =
    "id, title, artist, image_url, audio_url, duration, album_id, created_at, updated_at";

/// PostgreSQL implementation of SongRepository
#[derive(Clone)]
pub struct PgSongRepository {
    pool: PgPool,
}

impl PgSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for PgSongRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Song>> {
        let result = sqlx::query_as::<_, SongModel>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Song::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Song>> {
        let results = sqlx::query_as::<_, SongModel>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Song::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_album(&self, album_id: Snowflake) -> RepoResult<Vec<Song>> {
        let results = sqlx::query_as::<_, SongModel>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE album_id = $1 ORDER BY created_at ASC, id ASC"
        ))
        .bind(album_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Song::from).collect())
    }

    #[instrument(skip(self))]
    async fn sample(&self, limit: i64) -> RepoResult<Vec<Song>> {
        let results = sqlx::query_as::<_, SongModel>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs ORDER BY RANDOM() LIMIT $1"
        ))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Song::from).collect())
    }

    #[instrument(skip(self, song), fields(song_id = %song.id))]
    async fn create(&self, song: &Song) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO songs (id, title, artist, image_url, audio_url, duration, album_id,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(song.id.into_inner())
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.image_url)
        .bind(&song.audio_url)
        .bind(song.duration)
        .bind(song.album_id.map(Snowflake::into_inner))
        .bind(song.created_at)
        .bind(song.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_album(&self, album_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM songs WHERE album_id = $1")
            .bind(album_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
