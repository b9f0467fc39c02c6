//! Permission resolution
//!
//! Implements the permission oracle on top of the team, channel, post,
//! member, and role repositories.

use std::sync::Arc;

use async_trait::async_trait;
use teamline_core::traits::{
    ChannelRepository, MemberRepository, PermissionOracle, PostRepository, RoleRepository,
    TeamRepository,
};
use teamline_core::{Permissions, RepoResult, Session, Snowflake};

/// Resolves permissions from team membership and roles.
///
/// Missing scopes (unknown team, channel, or post) resolve to "no
/// permission" rather than an error, leaving the caller in charge of
/// how much to reveal.
pub struct PermissionService {
    team_repo: Arc<dyn TeamRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    post_repo: Arc<dyn PostRepository>,
    member_repo: Arc<dyn MemberRepository>,
    role_repo: Arc<dyn RoleRepository>,
}

impl PermissionService {
    pub fn new(
        team_repo: Arc<dyn TeamRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        post_repo: Arc<dyn PostRepository>,
        member_repo: Arc<dyn MemberRepository>,
        role_repo: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            team_repo,
            channel_repo,
            post_repo,
            member_repo,
            role_repo,
        }
    }

    /// Combined permission set of a user within a team
    async fn team_permissions(
        &self,
        session: &Session,
        team_id: Snowflake,
    ) -> RepoResult<Permissions> {
        let Some(team) = self.team_repo.find_by_id(team_id).await? else {
            return Ok(Permissions::empty());
        };

        if team.is_owner(session.user_id) {
            return Ok(Permissions::all());
        }

        let Some(member) = self.member_repo.find(team_id, session.user_id).await? else {
            return Ok(Permissions::empty());
        };

        let mut permissions = self
            .role_repo
            .find_default(team_id)
            .await?
            .map(|role| role.permissions)
            .unwrap_or_else(Permissions::empty);

        for role_id in &member.role_ids {
            if let Some(role) = self.role_repo.find_by_id(*role_id).await? {
                permissions |= role.permissions;
            }
        }

        Ok(permissions)
    }
}

#[async_trait]
impl PermissionOracle for PermissionService {
    async fn has_permission_to_team(
        &self,
        session: &Session,
        team_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool> {
        if session.is_admin {
            return Ok(true);
        }

        let permissions = self.team_permissions(session, team_id).await?;
        Ok(permissions.has(permission))
    }

    async fn has_permission_to_channel(
        &self,
        session: &Session,
        channel_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool> {
        if session.is_admin {
            return Ok(true);
        }

        let Some(channel) = self.channel_repo.find_by_id(channel_id).await? else {
            return Ok(false);
        };

        match channel.team_id {
            Some(team_id) => {
                let permissions = self.team_permissions(session, team_id).await?;
                Ok(permissions.has(permission))
            }
            // Direct and group channels grant a fixed set to recipients
            None => {
                let recipients = self.channel_repo.get_recipients(channel_id).await?;
                if !recipients.contains(&session.user_id) {
                    return Ok(false);
                }
                Ok(Permissions::DM_PARTICIPANT.has(permission))
            }
        }
    }

    async fn has_permission_to_channel_by_post(
        &self,
        session: &Session,
        post_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool> {
        let Some(post) = self.post_repo.find_by_id(post_id).await? else {
            return Ok(false);
        };

        self.has_permission_to_channel(session, post.channel_id, permission)
            .await
    }

    async fn has_global_permission(
        &self,
        session: &Session,
        _permission: Permissions,
    ) -> RepoResult<bool> {
        // Only system administrators hold grants outside team scope
        Ok(session.is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamline_core::{Channel, Post, Role, Team, TeamMember};
    use teamline_store::{
        InMemoryChannelRepository, InMemoryMemberRepository, InMemoryPostRepository,
        InMemoryRoleRepository, InMemoryTeamRepository,
    };

    struct Fixture {
        service: PermissionService,
        channels: Arc<InMemoryChannelRepository>,
        team: Snowflake,
    }

    async fn fixture() -> Fixture {
        let teams = Arc::new(InMemoryTeamRepository::new());
        let channels = Arc::new(InMemoryChannelRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new());
        let members = Arc::new(InMemoryMemberRepository::new());
        let roles = Arc::new(InMemoryRoleRepository::new());

        let team = Snowflake::new(1);
        let owner = Snowflake::new(100);
        teams
            .create(Team::new(team, "core".into(), owner))
            .await
            .unwrap();
        roles
            .create(Role::new_default(Snowflake::new(50), team))
            .await
            .unwrap();
        members
            .create(TeamMember::new(team, Snowflake::new(10)))
            .await
            .unwrap();

        let service = PermissionService::new(
            teams,
            channels.clone(),
            posts.clone(),
            members,
            roles,
        );

        // A team channel and a post in it
        channels
            .create(Channel::new_team_channel(
                Snowflake::new(20),
                team,
                "general".into(),
                teamline_core::ChannelType::Open,
            ))
            .await
            .unwrap();
        posts
            .create(Post::new(
                Snowflake::new(30),
                Snowflake::new(20),
                Snowflake::new(10),
                "hello".into(),
            ))
            .await
            .unwrap();

        Fixture {
            service,
            channels,
            team,
        }
    }

    fn member_session() -> Session {
        Session::new(Snowflake::new(10), vec![Snowflake::new(1)], false)
    }

    #[tokio::test]
    async fn test_member_has_default_permissions() {
        let fx = fixture().await;
        let session = member_session();

        assert!(fx
            .service
            .has_permission_to_team(&session, fx.team, Permissions::USE_SLASH_COMMANDS)
            .await
            .unwrap());
        assert!(!fx
            .service
            .has_permission_to_team(&session, fx.team, Permissions::MANAGE_SLASH_COMMANDS)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_non_member_has_nothing() {
        let fx = fixture().await;
        let session = Session::new(Snowflake::new(99), vec![], false);

        assert!(!fx
            .service
            .has_permission_to_team(&session, fx.team, Permissions::VIEW_TEAM)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_owner_has_everything() {
        let fx = fixture().await;
        let session = Session::new(Snowflake::new(100), vec![fx.team], false);

        assert!(fx
            .service
            .has_permission_to_team(&session, fx.team, Permissions::MANAGE_OTHERS_SLASH_COMMANDS)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_admin_bypasses_membership() {
        let fx = fixture().await;
        let session = Session::new(Snowflake::new(999), vec![], true);

        assert!(fx
            .service
            .has_permission_to_team(&session, fx.team, Permissions::MANAGE_SLASH_COMMANDS)
            .await
            .unwrap());
        assert!(fx
            .service
            .has_global_permission(&session, Permissions::USE_SLASH_COMMANDS)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_unknown_team_resolves_to_false() {
        let fx = fixture().await;
        let session = member_session();

        assert!(!fx
            .service
            .has_permission_to_team(&session, Snowflake::new(404), Permissions::VIEW_TEAM)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_channel_permission_via_post() {
        let fx = fixture().await;
        let session = member_session();

        assert!(fx
            .service
            .has_permission_to_channel_by_post(&session, Snowflake::new(30), Permissions::READ_CHANNEL)
            .await
            .unwrap());
        // Unknown post resolves to false
        assert!(!fx
            .service
            .has_permission_to_channel_by_post(&session, Snowflake::new(404), Permissions::READ_CHANNEL)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_direct_channel_grants_only_recipients() {
        let fx = fixture().await;
        fx.channels
            .create(Channel::new_direct(Snowflake::new(21)))
            .await
            .unwrap();
        fx.channels
            .set_recipients(Snowflake::new(21), vec![Snowflake::new(10), Snowflake::new(11)]);

        let recipient = member_session();
        assert!(fx
            .service
            .has_permission_to_channel(&recipient, Snowflake::new(21), Permissions::ADD_REACTION)
            .await
            .unwrap());
        // VIEW_TEAM is not part of the participant set
        assert!(!fx
            .service
            .has_permission_to_channel(&recipient, Snowflake::new(21), Permissions::VIEW_TEAM)
            .await
            .unwrap());

        let outsider = Session::new(Snowflake::new(55), vec![], false);
        assert!(!fx
            .service
            .has_permission_to_channel(&outsider, Snowflake::new(21), Permissions::READ_CHANNEL)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_non_admin_has_no_global_grants() {
        let fx = fixture().await;
        let session = member_session();

        assert!(!fx
            .service
            .has_global_permission(&session, Permissions::USE_SLASH_COMMANDS)
            .await
            .unwrap());
    }
}
