//! Aggregate counts row

use sqlx::FromRow;

/// Single-row result of the catalog statistics query
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CatalogStatsModel {
    pub total_songs: i64,
    pub total_albums: i64,
    pub total_users: i64,
    pub total_artists: i64,
}
