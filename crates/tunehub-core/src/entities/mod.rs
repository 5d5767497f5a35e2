//! Domain entities - core business objects

mod album;
mod message;
mod song;
mod stats;
mod user;

pub use album::Album;
pub use message::Message;
pub use song::Song;
pub use stats::CatalogStats;
pub use user::User;
