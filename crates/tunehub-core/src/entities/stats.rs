//! Aggregate catalog statistics

use serde::Serialize;

/// Totals shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_songs: i64,
    pub total_albums: i64,
    pub total_users: i64,
    /// Distinct artist names across songs and albums
    pub total_artists: i64,
}
