//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Album, CatalogStats, Message, Song, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by identity-provider subject
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// List every user except the given one, ordered by name
    async fn list_except(&self, external_id: &str) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Song Repository
// ============================================================================

#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Song>>;

    /// All songs, newest first
    async fn list_all(&self) -> RepoResult<Vec<Song>>;

    /// Songs of one album, oldest first (track order)
    async fn find_by_album(&self, album_id: Snowflake) -> RepoResult<Vec<Song>>;

    /// Uniformly random sample of at most `limit` songs
    async fn sample(&self, limit: i64) -> RepoResult<Vec<Song>>;

    async fn create(&self, song: &Song) -> RepoResult<()>;

    /// Delete a song; returns false if it did not exist
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Delete all songs of an album; returns the number removed
    async fn delete_by_album(&self, album_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Album Repository
// ============================================================================

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Album>>;

    async fn list_all(&self) -> RepoResult<Vec<Album>>;

    async fn create(&self, album: &Album) -> RepoResult<()>;

    /// Delete an album; returns false if it did not exist
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Both directions of a conversation between two users, oldest first
    async fn find_conversation(&self, user_a: &str, user_b: &str) -> RepoResult<Vec<Message>>;
}

// ============================================================================
// Stats Repository
// ============================================================================

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn catalog_stats(&self) -> RepoResult<CatalogStats>;
}
