//! In-memory team repository

use async_trait::async_trait;
use dashmap::DashMap;
use teamline_core::{RepoResult, Snowflake, Team, TeamRepository};

#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: DashMap<Snowflake, Team>,
}

impl InMemoryTeamRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Team>> {
        Ok(self.teams.get(&id).map(|t| t.clone()))
    }

    async fn create(&self, team: Team) -> RepoResult<Team> {
        self.teams.insert(team.id, team.clone());
        Ok(team)
    }
}
