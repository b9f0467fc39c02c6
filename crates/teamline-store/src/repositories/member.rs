//! In-memory team membership repository

use async_trait::async_trait;
use dashmap::DashMap;
use teamline_core::{MemberRepository, RepoResult, Snowflake, TeamMember};

#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    // Keyed by (team, user)
    members: DashMap<(Snowflake, Snowflake), TeamMember>,
}

impl InMemoryMemberRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find(
        &self,
        team_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<TeamMember>> {
        Ok(self.members.get(&(team_id, user_id)).map(|m| m.clone()))
    }

    async fn is_member(&self, team_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        Ok(self.members.contains_key(&(team_id, user_id)))
    }

    async fn find_team_ids_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        Ok(self
            .members
            .iter()
            .filter(|entry| entry.key().1 == user_id)
            .map(|entry| entry.key().0)
            .collect())
    }

    async fn create(&self, member: TeamMember) -> RepoResult<TeamMember> {
        self.members
            .insert((member.team_id, member.user_id), member.clone());
        Ok(member)
    }
}
