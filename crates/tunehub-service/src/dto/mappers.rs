//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tunehub_core::entities::{Album, Message, Song, User};
use tunehub_core::Snowflake;

use super::responses::{
    AlbumResponse, AlbumWithSongsResponse, MessageResponse, SongResponse, SongSummaryResponse,
    UserResponse,
};

// ============================================================================
// User & Message Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            external_id: user.external_id.clone(),
            full_name: user.full_name.clone(),
            image_url: user.image_url.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.clone(),
            receiver_id: message.receiver_id.clone(),
            content: message.content.clone(),
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

// ============================================================================
// Catalog Mappers
// ============================================================================

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            id: song.id.to_string(),
            title: song.title,
            artist: song.artist,
            image_url: song.image_url,
            audio_url: song.audio_url,
            duration: song.duration,
            album_id: song.album_id.as_ref().map(Snowflake::to_string),
            created_at: song.created_at,
            updated_at: song.updated_at,
        }
    }
}

impl From<Song> for SongSummaryResponse {
    fn from(song: Song) -> Self {
        Self {
            id: song.id.to_string(),
            title: song.title,
            artist: song.artist,
            image_url: song.image_url,
            audio_url: song.audio_url,
        }
    }
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            id: album.id.to_string(),
            title: album.title,
            artist: album.artist,
            image_url: album.image_url,
            release_year: album.release_year,
            created_at: album.created_at,
            updated_at: album.updated_at,
        }
    }
}

impl AlbumWithSongsResponse {
    pub fn new(album: Album, songs: Vec<Song>) -> Self {
        Self {
            album: AlbumResponse::from(album),
            songs: songs.into_iter().map(SongResponse::from).collect(),
        }
    }
}
