//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context and token verification.

use std::sync::Arc;

use tunehub_common::{AdminConfig, AppConfig, JwtService};
use tunehub_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    jwt_service: Arc<JwtService>,
    admin: Arc<AdminConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, jwt_service: JwtService, admin: AdminConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            jwt_service: Arc::new(jwt_service),
            admin: Arc::new(admin),
        }
    }

    /// State for a service context, with auth settings taken from `config`
    pub fn from_config(service_context: ServiceContext, config: &AppConfig) -> Self {
        Self::new(
            service_context,
            JwtService::new(&config.jwt.secret),
            config.admin.clone(),
        )
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Who may use admin routes
    pub fn admin(&self) -> &AdminConfig {
        &self.admin
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("admins", &self.admin.user_ids.len())
            .finish()
    }
}
