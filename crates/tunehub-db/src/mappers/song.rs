//! Song entity <-> model mapper

use tunehub_core::entities::Song;
use tunehub_core::value_objects::Snowflake;

use crate::models::SongModel;

impl From<SongModel> for Song {
    fn from(model: SongModel) -> Self {
        Song {
            id: Snowflake::new(model.id),
            title: model.title,
            artist: model.artist,
            image_url: model.image_url,
            audio_url: model.audio_url,
            duration: model.duration,
            album_id: model.album_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
