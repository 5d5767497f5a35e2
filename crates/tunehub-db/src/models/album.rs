//! Album database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for albums table
#[derive(Debug, Clone, FromRow)]
pub struct AlbumModel {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub release_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
