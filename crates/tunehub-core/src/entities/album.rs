//! Album entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// An album groups songs by the same release
///
/// Membership is stored on the song side (`Song::album_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: Snowflake,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub release_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Album {
    pub fn new(
        id: Snowflake,
        title: String,
        artist: String,
        image_url: String,
        release_year: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            artist,
            image_url,
            release_year,
            created_at: now,
            updated_at: now,
        }
    }
}
