//! PostgreSQL implementation of AlbumRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tunehub_core::entities::Album;
use tunehub_core::traits::{AlbumRepository, RepoResult};
use tunehub_core::value_objects::Snowflake;

use crate::models::AlbumModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AlbumRepository
#[derive(Clone)]
pub struct PgAlbumRepository {
    pool: PgPool,
}

impl PgAlbumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PgAlbumRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Album>> {
        let result = sqlx::query_as::<_, AlbumModel>(
            r"
            SELECT id, title, artist, image_url, release_year, created_at, updated_at
            FROM albums
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Album::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Album>> {
        let results = sqlx::query_as::<_, AlbumModel>(
            r"
            SELECT id, title, artist, image_url, release_year, created_at, updated_at
            FROM albums
            ORDER BY created_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Album::from).collect())
    }

    #[instrument(skip(self, album), fields(album_id = %album.id))]
    async fn create(&self, album: &Album) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO albums (id, title, artist, image_url, release_year, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(album.id.into_inner())
        .bind(&album.title)
        .bind(&album.artist)
        .bind(&album.image_url)
        .bind(album.release_year)
        .bind(album.created_at)
        .bind(album.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
