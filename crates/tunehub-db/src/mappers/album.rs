//! Album entity <-> model mapper

use tunehub_core::entities::{Album, CatalogStats};
use tunehub_core::value_objects::Snowflake;

use crate::models::{AlbumModel, CatalogStatsModel};

impl From<AlbumModel> for Album {
    fn from(model: AlbumModel) -> Self {
        Album {
            id: Snowflake::new(model.id),
            title: model.title,
            artist: model.artist,
            image_url: model.image_url,
            release_year: model.release_year,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CatalogStatsModel> for CatalogStats {
    fn from(model: CatalogStatsModel) -> Self {
        CatalogStats {
            total_songs: model.total_songs,
            total_albums: model.total_albums,
            total_users: model.total_users,
            total_artists: model.total_artists,
        }
    }
}
