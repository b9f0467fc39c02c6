//! Trait seams between the domain and its infrastructure

mod audit;
mod executor;
mod oracle;
mod repositories;

pub use audit::{AuditRecord, AuditSink, AuditStatus};
pub use executor::CommandExecutor;
pub use oracle::PermissionOracle;
pub use repositories::{
    ChannelRepository, CommandRepository, MemberRepository, PostRepository, ReactionRepository,
    RepoResult, RoleRepository, TeamRepository,
};
