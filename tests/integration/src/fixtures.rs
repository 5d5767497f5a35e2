//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Ids are made unique
//! per run so tests can share one database.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// A fresh external user id
pub fn unique_user_id() -> String {
    format!("user_{}", unique_suffix())
}

/// Sign-in callback request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackRequest {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl AuthCallbackRequest {
    pub fn unique(first_name: &str) -> Self {
        Self {
            id: unique_user_id(),
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            image_url: "https://example.com/avatar.png".to_string(),
        }
    }
}

/// Success envelope
#[derive(Debug, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub external_id: String,
    pub full_name: String,
    pub image_url: String,
}

/// Stored direct message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
}

/// Create album request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub release_year: i32,
}

impl CreateAlbumRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("Album {}", unique_suffix()),
            artist: format!("Artist {}", unique_suffix()),
            image_url: "https://example.com/album.png".to_string(),
            release_year: 2020,
        }
    }
}

/// Create song request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongRequest {
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub audio_url: String,
    pub duration: i32,
    pub album_id: Option<String>,
}

impl CreateSongRequest {
    pub fn unique(album_id: Option<String>) -> Self {
        Self {
            title: format!("Song {}", unique_suffix()),
            artist: "Integration Band".to_string(),
            image_url: "https://example.com/song.png".to_string(),
            audio_url: "https://example.com/song.mp3".to_string(),
            duration: 180,
            album_id,
        }
    }
}

/// Album response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub release_year: i32,
}

/// Album with its songs
#[derive(Debug, Deserialize)]
pub struct AlbumWithSongsResponse {
    #[serde(flatten)]
    pub album: AlbumResponse,
    pub songs: Vec<SongResponse>,
}

/// Song response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongResponse {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: i32,
    pub album_id: Option<String>,
}

/// Song card used by the home-page lists
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSummaryResponse {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub audio_url: String,
}

/// Catalog totals
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_songs: i64,
    pub total_albums: i64,
    pub total_users: i64,
    pub total_artists: i64,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
