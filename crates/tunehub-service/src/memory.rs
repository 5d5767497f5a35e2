//! In-memory repositories
//!
//! A single [`MemoryStore`] implements every repository trait over plain
//! vectors. Used by unit tests here and in the gateway, and handy for running
//! the gateway without a database.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tunehub_core::entities::{Album, CatalogStats, Message, Song, User};
use tunehub_core::traits::{
    AlbumRepository, MessageRepository, RepoResult, SongRepository, StatsRepository,
    UserRepository,
};
use tunehub_core::{DomainError, Snowflake};

use crate::services::ServiceContext;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    songs: Vec<Song>,
    albums: Vec<Album>,
    messages: Vec<Message>,
}

/// Process-local storage for all entities
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    /// When set, every message write fails with a database error
    fail_message_writes: Mutex<bool>,
    /// Added latency on every message write
    message_write_delay: Mutex<Duration>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make subsequent message writes fail, to exercise error paths
    pub fn set_fail_message_writes(&self, fail: bool) {
        *self.fail_message_writes.lock() = fail;
    }

    /// Make subsequent message writes take at least `delay`
    pub fn set_message_write_delay(&self, delay: Duration) {
        *self.message_write_delay.lock() = delay;
    }

    pub fn message_count(&self) -> usize {
        self.tables.lock().messages.len()
    }
}

/// Context whose repositories all share one fresh [`MemoryStore`]
pub fn memory_context() -> ServiceContext {
    memory_context_with(&MemoryStore::new())
}

pub fn memory_context_with(store: &Arc<MemoryStore>) -> ServiceContext {
    ServiceContext::from_store(Arc::clone(store))
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.users.iter().any(|u| u.external_id == user.external_id) {
            return Err(DomainError::UserAlreadyExists(user.external_id.clone()));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn list_except(&self, external_id: &str) -> RepoResult<Vec<User>> {
        let tables = self.tables.lock();
        let mut users: Vec<User> = tables
            .users
            .iter()
            .filter(|u| u.external_id != external_id)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        Ok(users)
    }
}

#[async_trait]
impl SongRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Song>> {
        Ok(self.tables.lock().songs.iter().find(|s| s.id == id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Song>> {
        let mut songs = self.tables.lock().songs.clone();
        songs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(songs)
    }

    async fn find_by_album(&self, album_id: Snowflake) -> RepoResult<Vec<Song>> {
        let mut songs: Vec<Song> = self
            .tables
            .lock()
            .songs
            .iter()
            .filter(|s| s.album_id == Some(album_id))
            .cloned()
            .collect();
        songs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(songs)
    }

    // first `limit` songs; tests only rely on the count
    async fn sample(&self, limit: i64) -> RepoResult<Vec<Song>> {
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self.tables.lock().songs.iter().take(take).cloned().collect())
    }

    async fn create(&self, song: &Song) -> RepoResult<()> {
        self.tables.lock().songs.push(song.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        let before = tables.songs.len();
        tables.songs.retain(|s| s.id != id);
        Ok(tables.songs.len() < before)
    }

    async fn delete_by_album(&self, album_id: Snowflake) -> RepoResult<u64> {
        let mut tables = self.tables.lock();
        let before = tables.songs.len();
        tables.songs.retain(|s| s.album_id != Some(album_id));
        Ok((before - tables.songs.len()) as u64)
    }
}

#[async_trait]
impl AlbumRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Album>> {
        Ok(self.tables.lock().albums.iter().find(|a| a.id == id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Album>> {
        Ok(self.tables.lock().albums.clone())
    }

    async fn create(&self, album: &Album) -> RepoResult<()> {
        self.tables.lock().albums.push(album.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        let before = tables.albums.len();
        tables.albums.retain(|a| a.id != id);
        // mirror ON DELETE SET NULL
        for song in tables.songs.iter_mut().filter(|s| s.album_id == Some(id)) {
            song.album_id = None;
        }
        Ok(tables.albums.len() < before)
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, message: &Message) -> RepoResult<()> {
        let delay = *self.message_write_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_message_writes.lock() {
            return Err(DomainError::DatabaseError("message store unavailable".to_string()));
        }
        self.tables.lock().messages.push(message.clone());
        Ok(())
    }

    async fn find_conversation(&self, user_a: &str, user_b: &str) -> RepoResult<Vec<Message>> {
        let tables = self.tables.lock();
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.is_between(user_a, user_b))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StatsRepository for MemoryStore {
    async fn catalog_stats(&self) -> RepoResult<CatalogStats> {
        let tables = self.tables.lock();
        let artists: BTreeSet<&str> = tables
            .songs
            .iter()
            .map(|s| s.artist.as_str())
            .chain(tables.albums.iter().map(|a| a.artist.as_str()))
            .collect();

        Ok(CatalogStats {
            total_songs: tables.songs.len() as i64,
            total_albums: tables.albums.len() as i64,
            total_users: tables.users.len() as i64,
            total_artists: artists.len() as i64,
        })
    }
}
