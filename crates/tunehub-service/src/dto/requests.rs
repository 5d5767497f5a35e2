//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Sent by the frontend after the identity provider signs a user in
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthCallbackRequest {
    /// Identity-provider subject
    #[validate(length(min = 1, max = 255, message = "id is required"))]
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub image_url: String,
}

// ============================================================================
// Catalog Requests
// ============================================================================

/// Create song request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: String,

    #[validate(length(min = 1, message = "imageUrl is required"))]
    pub image_url: String,

    #[validate(length(min = 1, message = "audioUrl is required"))]
    pub audio_url: String,

    /// Length in seconds
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: i32,

    /// Album to attach the song to (Snowflake as string); empty means none
    pub album_id: Option<String>,
}

/// Create album request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: String,

    #[validate(length(min = 1, message = "imageUrl is required"))]
    pub image_url: String,

    #[validate(range(min = 1000, max = 9999, message = "Release year must be a four-digit year"))]
    pub release_year: i32,
}
