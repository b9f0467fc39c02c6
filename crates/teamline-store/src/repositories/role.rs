//! In-memory role repository

use async_trait::async_trait;
use dashmap::DashMap;
use teamline_core::{RepoResult, Role, RoleRepository, Snowflake};

#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: DashMap<Snowflake, Role>,
}

impl InMemoryRoleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Role>> {
        Ok(self.roles.get(&id).map(|r| r.clone()))
    }

    async fn find_default(&self, team_id: Snowflake) -> RepoResult<Option<Role>> {
        Ok(self
            .roles
            .iter()
            .find(|entry| entry.team_id == team_id && entry.is_default)
            .map(|entry| entry.clone()))
    }

    async fn create(&self, role: Role) -> RepoResult<Role> {
        self.roles.insert(role.id, role.clone());
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_default_role() {
        let repo = InMemoryRoleRepository::new();
        let team = Snowflake::new(1);

        repo.create(Role::new_default(Snowflake::new(100), team))
            .await
            .unwrap();

        let role = repo.find_default(team).await.unwrap().unwrap();
        assert!(role.is_default);
        assert!(repo
            .find_default(Snowflake::new(2))
            .await
            .unwrap()
            .is_none());
    }
}
