//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase, string IDs)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{AuthCallbackRequest, CreateAlbumRequest, CreateSongRequest};

pub use responses::{
    AdminCheckResponse, AlbumResponse, AlbumWithSongsResponse, HealthChecks, HealthResponse,
    MessageResponse, ReadinessResponse, SongResponse, SongSummaryResponse, SuccessResponse,
    UserResponse,
};
