//! # teamline-store
//!
//! Storage layer providing concurrent in-memory repositories plus the
//! built-in slash command set and its executor.

pub mod builtin;
pub mod repositories;

pub use builtin::{BuiltinCommandExecutor, BUILTIN_TEAM_ID};
pub use repositories::{
    InMemoryChannelRepository, InMemoryCommandRepository, InMemoryMemberRepository,
    InMemoryPostRepository, InMemoryReactionRepository, InMemoryRoleRepository,
    InMemoryTeamRepository,
};
