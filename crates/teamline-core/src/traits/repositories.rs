//! Repository traits implemented by the storage layer

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{Channel, Command, Post, Reaction, Role, Team, TeamMember};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Team>>;
    async fn create(&self, team: Team) -> RepoResult<Team>;
}

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>>;
    async fn create(&self, channel: Channel) -> RepoResult<Channel>;

    /// Users participating in a direct or group channel
    async fn get_recipients(&self, channel_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;
    async fn create(&self, post: Post) -> RepoResult<Post>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find(&self, team_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<TeamMember>>;
    async fn is_member(&self, team_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;
    async fn find_team_ids_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
    async fn create(&self, member: TeamMember) -> RepoResult<TeamMember>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Role>>;
    async fn find_default(&self, team_id: Snowflake) -> RepoResult<Option<Role>>;
    async fn create(&self, role: Role) -> RepoResult<Role>;
}

#[async_trait]
pub trait CommandRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Command>>;
    async fn create(&self, command: Command) -> RepoResult<Command>;
    async fn update(&self, command: Command) -> RepoResult<Command>;
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Reassign a command to a different team
    async fn move_to_team(&self, id: Snowflake, team_id: Snowflake) -> RepoResult<Command>;

    /// Replace the verification token
    async fn regen_token(&self, id: Snowflake, token: String) -> RepoResult<Command>;

    /// Custom commands registered on the team
    async fn list_team_commands(&self, team_id: Snowflake) -> RepoResult<Vec<Command>>;

    /// Custom commands plus every built-in command
    async fn list_all_commands(&self, team_id: Snowflake) -> RepoResult<Vec<Command>>;

    /// Built-in commands plus custom commands with autocomplete enabled
    async fn list_autocomplete_commands(&self, team_id: Snowflake) -> RepoResult<Vec<Command>>;
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a reaction, or return the existing row when the same
    /// (user, post, emoji) triple is already present.
    async fn save(&self, reaction: Reaction) -> RepoResult<Reaction>;

    async fn delete(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        emoji_name: &str,
    ) -> RepoResult<()>;

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Reaction>>;

    /// Reactions for many posts at once, keyed by post id
    async fn find_by_post_ids(
        &self,
        post_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, Vec<Reaction>>>;
}
