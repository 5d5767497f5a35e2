//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use tunehub_core::traits::{
    AlbumRepository, MessageRepository, SongRepository, StatsRepository, UserRepository,
};
use tunehub_core::{Snowflake, SnowflakeGenerator};
use tunehub_db::{
    PgAlbumRepository, PgMessageRepository, PgPool, PgSongRepository, PgStatsRepository,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared. The pool is optional so services can
/// run against in-memory repositories in tests.
#[derive(Clone)]
pub struct ServiceContext {
    pool: Option<PgPool>,

    user_repo: Arc<dyn UserRepository>,
    song_repo: Arc<dyn SongRepository>,
    album_repo: Arc<dyn AlbumRepository>,
    message_repo: Arc<dyn MessageRepository>,
    stats_repo: Arc<dyn StatsRepository>,

    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Context whose repositories are all served by one store
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserRepository
            + SongRepository
            + AlbumRepository
            + MessageRepository
            + StatsRepository
            + 'static,
    {
        Self {
            pool: None,
            user_repo: store.clone(),
            song_repo: store.clone(),
            album_repo: store.clone(),
            message_repo: store.clone(),
            stats_repo: store,
            snowflake_generator: Arc::default(),
        }
    }

    // === Database Pool ===

    /// PostgreSQL pool, if the context is backed by one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn song_repo(&self) -> &dyn SongRepository {
        self.song_repo.as_ref()
    }

    pub fn album_repo(&self) -> &dyn AlbumRepository {
        self.album_repo.as_ref()
    }

    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }

    // === IDs ===

    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    song_repo: Option<Arc<dyn SongRepository>>,
    album_repo: Option<Arc<dyn AlbumRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories for everything backed by `pool`
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.user_repo = Some(Arc::new(PgUserRepository::new(pool.clone())));
        self.song_repo = Some(Arc::new(PgSongRepository::new(pool.clone())));
        self.album_repo = Some(Arc::new(PgAlbumRepository::new(pool.clone())));
        self.message_repo = Some(Arc::new(PgMessageRepository::new(pool.clone())));
        self.stats_repo = Some(Arc::new(PgStatsRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn song_repo(mut self, repo: Arc<dyn SongRepository>) -> Self {
        self.song_repo = Some(repo);
        self
    }

    pub fn album_repo(mut self, repo: Arc<dyn AlbumRepository>) -> Self {
        self.album_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// A missing generator defaults to worker 0.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            user_repo: required(self.user_repo, "user_repo")?,
            song_repo: required(self.song_repo, "song_repo")?,
            album_repo: required(self.album_repo, "album_repo")?,
            message_repo: required(self.message_repo, "message_repo")?,
            stats_repo: required(self.stats_repo, "stats_repo")?,
            snowflake_generator: self.snowflake_generator.unwrap_or_default(),
        })
    }
}
