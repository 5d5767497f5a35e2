//! Stats handler

use axum::{extract::State, Json};
use tunehub_core::CatalogStats;
use tunehub_service::StatsService;

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Catalog totals for the admin dashboard
///
/// GET /stats
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<CatalogStats>> {
    let stats = StatsService::new(state.service_context())
        .catalog_stats()
        .await?;
    Ok(Json(stats))
}
