//! # teamline-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CommandService, PermissionService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
