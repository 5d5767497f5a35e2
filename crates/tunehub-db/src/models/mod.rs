//! Database models - SQLx-compatible structs for PostgreSQL tables

mod album;
mod message;
mod song;
mod stats;
mod user;

pub use album::AlbumModel;
pub use message::MessageModel;
pub use song::SongModel;
pub use stats::CatalogStatsModel;
pub use user::UserModel;
