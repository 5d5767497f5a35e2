//! Stats service

use tracing::instrument;
use tunehub_core::entities::CatalogStats;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin dashboard statistics
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn catalog_stats(&self) -> ServiceResult<CatalogStats> {
        Ok(self.ctx.stats_repo().catalog_stats().await?)
    }
}
