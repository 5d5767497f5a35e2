//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET and ports are optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TEST_ADMIN_ID,
};
use reqwest::StatusCode;

async fn sign_in(server: &TestServer, first_name: &str) -> AuthCallbackRequest {
    let request = AuthCallbackRequest::unique(first_name);
    let response = server.post("/api/auth/callback", &request).await.unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    request
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth & User Tests
// ============================================================================

#[tokio::test]
async fn test_callback_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = sign_in(&server, "Repeat").await;

    let response = server.post("/api/auth/callback", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let viewer = sign_in(&server, "Viewer").await;
    let token = server.token_for(&viewer.id).unwrap();
    let response = server.get_auth("/api/users", &token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let matching: Vec<_> = users.iter().filter(|u| u.external_id == request.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].full_name, "Repeat Tester");
    assert!(users.iter().all(|u| u.external_id != viewer.id));
}

#[tokio::test]
async fn test_callback_rejects_missing_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = AuthCallbackRequest::unique("Nobody");
    request.id = String::new();

    let response = server.post("/api/auth/callback", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_users_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");

    let response = server.get_auth("/api/users", "garbage").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_empty_conversation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = sign_in(&server, "Quiet").await;
    let b = sign_in(&server, "Silent").await;

    let token = server.token_for(&a.id).unwrap();
    let response = server
        .get_auth(&format!("/api/users/messages/{}", b.id), &token)
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages.is_empty());
}

// ============================================================================
// Admin & Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_admin_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let admin = server.token_for(TEST_ADMIN_ID).unwrap();
    let response = server.get_auth("/api/admin/check", &admin).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["admin"], true);

    let plain = server.token_for(&unique_user_id()).unwrap();
    let response = server.get_auth("/api/admin/check", &plain).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "ADMIN_REQUIRED");

    let response = server
        .post_auth("/api/admin/albums", &plain, &CreateAlbumRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_album_and_song_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token_for(TEST_ADMIN_ID).unwrap();

    let request = CreateAlbumRequest::unique();
    let response = server
        .post_auth("/api/admin/albums", &admin, &request)
        .await
        .unwrap();
    let album: AlbumResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(album.title, request.title);
    assert_eq!(album.release_year, 2020);

    let response = server
        .post_auth(
            "/api/admin/songs",
            &admin,
            &CreateSongRequest::unique(Some(album.id.clone())),
        )
        .await
        .unwrap();
    let song: SongResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(song.album_id.as_deref(), Some(album.id.as_str()));

    let response = server.get(&format!("/api/albums/{}", album.id)).await.unwrap();
    let detail: AlbumWithSongsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.album.id, album.id);
    assert_eq!(detail.songs.len(), 1);
    assert_eq!(detail.songs[0].id, song.id);

    let response = server.get("/api/albums").await.unwrap();
    let albums: Vec<AlbumResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(albums.iter().any(|a| a.id == album.id));

    let response = server
        .delete_auth(&format!("/api/admin/albums/{}", album.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/albums/{}", album.id)).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_ALBUM");

    // the album's song is gone too
    let response = server
        .delete_auth(&format!("/api/admin/songs/{}", song.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_song_with_unknown_album() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token_for(TEST_ADMIN_ID).unwrap();

    let response = server
        .post_auth(
            "/api/admin/songs",
            &admin,
            &CreateSongRequest::unique(Some("1".to_string())),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_ALBUM");
}

#[tokio::test]
async fn test_song_lists() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.token_for(TEST_ADMIN_ID).unwrap();

    let response = server
        .post_auth("/api/admin/songs", &admin, &CreateSongRequest::unique(None))
        .await
        .unwrap();
    let single: SongResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(single.album_id.is_none());

    for path in ["/api/songs/featured", "/api/songs/made-for-you", "/api/songs/trending"] {
        let response = server.get(path).await.unwrap();
        let songs: Vec<SongSummaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(!songs.is_empty(), "{path} returned no songs");
    }

    let response = server.get_auth("/api/songs", &admin).await.unwrap();
    let songs: Vec<SongResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(songs.iter().any(|s| s.id == single.id));

    let response = server
        .delete_auth(&format!("/api/admin/songs/{}", single.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    sign_in(&server, "Counted").await;
    let admin = server.token_for(TEST_ADMIN_ID).unwrap();

    let response = server.get_auth("/api/stats", &admin).await.unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stats.total_users >= 1);
    assert!(stats.total_songs >= 0);
    assert!(stats.total_albums >= 0);
    assert!(stats.total_artists <= stats.total_songs + stats.total_albums);

    let plain = server.token_for(&unique_user_id()).unwrap();
    let response = server.get_auth("/api/stats", &plain).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
