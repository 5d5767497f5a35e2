//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{admin, albums, auth, health, songs, stats, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(catalog_routes())
        .merge(admin_routes())
        .route("/stats", get(stats::get_stats))
}

fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/callback", post(auth::callback))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/messages/:user_id", get(users::get_messages))
}

/// Public catalog browsing (plus the admin-only full song list)
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(songs::list_songs))
        .route("/songs/featured", get(songs::featured_songs))
        .route("/songs/made-for-you", get(songs::made_for_you_songs))
        .route("/songs/trending", get(songs::trending_songs))
        .route("/albums", get(albums::list_albums))
        .route("/albums/:album_id", get(albums::get_album))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/check", get(admin::check_admin))
        .route("/admin/songs", post(admin::create_song))
        .route("/admin/songs/:id", delete(admin::delete_song))
        .route("/admin/albums", post(admin::create_album))
        .route("/admin/albums/:id", delete(admin::delete_album))
}
