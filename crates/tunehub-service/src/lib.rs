//! # tunehub-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod memory;
pub mod services;

pub use dto::{
    AdminCheckResponse, AlbumResponse, AlbumWithSongsResponse, AuthCallbackRequest,
    CreateAlbumRequest, CreateSongRequest, HealthChecks, HealthResponse, MessageResponse,
    ReadinessResponse, SongResponse, SongSummaryResponse, SuccessResponse, UserResponse,
};
pub use services::{
    CatalogService, MessageService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StatsService, UserService,
};
