//! User service
//!
//! Mirrors identity-provider accounts and lists chat partners.

use tracing::{info, instrument};
use tunehub_core::entities::User;
use tunehub_core::DomainError;
use validator::Validate;

use crate::dto::{AuthCallbackRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create the local user for a signed-in account if it does not exist yet
    ///
    /// Returns true when a new user was created. Safe to call on every sign-in.
    #[instrument(skip(self, request), fields(external_id = %request.id))]
    pub async fn sync_from_callback(&self, request: AuthCallbackRequest) -> ServiceResult<bool> {
        request.validate()?;

        if self
            .ctx
            .user_repo()
            .find_by_external_id(&request.id)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let user = User::new(
            self.ctx.generate_id(),
            request.id,
            User::display_name(&request.first_name, &request.last_name),
            request.image_url,
        );

        match self.ctx.user_repo().create(&user).await {
            Ok(()) => {
                info!(user_id = %user.id, "User created");
                Ok(true)
            }
            // a concurrent callback for the same account won the race
            Err(DomainError::UserAlreadyExists(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Every user except the caller
    #[instrument(skip(self))]
    pub async fn list_others(&self, external_id: &str) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_except(external_id).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
