//! Application services

mod command;
mod context;
mod error;
mod permission;
mod reaction;

pub use command::CommandService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use permission::PermissionService;
pub use reaction::ReactionService;
