//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tunehub_core::entities::CatalogStats;
use tunehub_core::traits::{RepoResult, StatsRepository};

use crate::models::CatalogStatsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn catalog_stats(&self) -> RepoResult<CatalogStats> {
        // UNION (not UNION ALL) so an artist with both songs and albums counts once
        let row = sqlx::query_as::<_, CatalogStatsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM songs)  AS total_songs,
                (SELECT COUNT(*) FROM albums) AS total_albums,
                (SELECT COUNT(*) FROM users)  AS total_users,
                (SELECT COUNT(*) FROM (
                    SELECT artist FROM songs
                    UNION
                    SELECT artist FROM albums
                ) AS artists) AS total_artists
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CatalogStats::from(row))
    }
}
