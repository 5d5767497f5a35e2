//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AlbumRepository, MessageRepository, RepoResult, SongRepository, StatsRepository,
    UserRepository,
};
