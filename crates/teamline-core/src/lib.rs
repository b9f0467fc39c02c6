//! # teamline-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the external-service seams (permission oracle, command executor, audit
//! sink). This crate has zero dependencies on infrastructure (web framework,
//! storage engines, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AutocompleteSuggestion, Channel, ChannelType, Command, CommandArgs, CommandMethod,
    CommandResponse, CommandResponseType, Post, Reaction, Role, Team, TeamMember,
    EMOJI_NAME_MAX_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    AuditRecord, AuditSink, AuditStatus, ChannelRepository, CommandExecutor, CommandRepository,
    MemberRepository, PermissionOracle, PostRepository, ReactionRepository, RepoResult,
    RoleRepository, TeamRepository,
};
pub use value_objects::{
    Permissions, Session, Snowflake, SnowflakeGenerator, SnowflakeParseError,
    SYSTEM_ADMIN_ROLE_ID, SYSTEM_USER_ROLE_ID,
};
