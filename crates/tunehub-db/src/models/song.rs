//! Song database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for songs table
#[derive(Debug, Clone, FromRow)]
pub struct SongModel {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub audio_url: String,
    pub duration: i32,
    pub album_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SongModel {
    /// Check if the song belongs to an album
    #[inline]
    pub fn has_album(&self) -> bool {
        self.album_id.is_some()
    }
}
