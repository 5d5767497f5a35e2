//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and handles validation
//! and orchestration of domain operations.

pub mod catalog;
pub mod context;
pub mod error;
pub mod message;
pub mod stats;
pub mod user;

pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use stats::StatsService;
pub use user::UserService;
