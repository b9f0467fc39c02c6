//! In-memory repository implementations backed by DashMap

mod channel;
mod command;
mod member;
mod post;
mod reaction;
mod role;
mod team;

pub use channel::InMemoryChannelRepository;
pub use command::InMemoryCommandRepository;
pub use member::InMemoryMemberRepository;
pub use post::InMemoryPostRepository;
pub use reaction::InMemoryReactionRepository;
pub use role::InMemoryRoleRepository;
pub use team::InMemoryTeamRepository;
