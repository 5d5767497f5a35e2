//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tunehub-core.

mod album;
mod error;
mod message;
mod song;
mod stats;
mod user;

pub use album::PgAlbumRepository;
pub use message::PgMessageRepository;
pub use song::PgSongRepository;
pub use stats::PgStatsRepository;
pub use user::PgUserRepository;
