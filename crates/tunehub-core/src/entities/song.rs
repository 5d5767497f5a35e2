//! Song entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A playable track in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: Snowflake,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub audio_url: String,
    /// Length in seconds
    pub duration: i32,
    pub album_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    pub fn new(
        id: Snowflake,
        title: String,
        artist: String,
        image_url: String,
        audio_url: String,
        duration: i32,
        album_id: Option<Snowflake>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            artist,
            image_url,
            audio_url,
            duration,
            album_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.album_id.is_none()
    }

    /// Duration formatted as `m:ss`
    pub fn formatted_duration(&self) -> String {
        let secs = self.duration.max(0);
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
