//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod commands;
pub mod health;
pub mod reactions;
