//! In-memory slash command repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use teamline_core::{Command, CommandRepository, DomainError, RepoResult, Snowflake};

use crate::builtin::builtin_commands;

/// Custom commands keyed by id; built-in commands are a fixed set merged
/// into the listing methods.
#[derive(Debug)]
pub struct InMemoryCommandRepository {
    commands: DashMap<Snowflake, Command>,
    builtins: Vec<Command>,
}

impl InMemoryCommandRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: DashMap::new(),
            builtins: builtin_commands(),
        }
    }
}

impl Default for InMemoryCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRepository for InMemoryCommandRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Command>> {
        Ok(self.commands.get(&id).map(|c| c.clone()))
    }

    async fn create(&self, command: Command) -> RepoResult<Command> {
        let duplicate = self.commands.iter().any(|entry| {
            entry.team_id == command.team_id && entry.trigger == command.trigger
        });
        if duplicate {
            return Err(DomainError::TriggerAlreadyExists(command.trigger));
        }

        self.commands.insert(command.id, command.clone());
        Ok(command)
    }

    async fn update(&self, mut command: Command) -> RepoResult<Command> {
        if !self.commands.contains_key(&command.id) {
            return Err(DomainError::CommandNotFound(command.id));
        }
        command.updated_at = Utc::now();
        self.commands.insert(command.id, command.clone());
        Ok(command)
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.commands
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CommandNotFound(id))
    }

    async fn move_to_team(&self, id: Snowflake, team_id: Snowflake) -> RepoResult<Command> {
        let mut entry = self
            .commands
            .get_mut(&id)
            .ok_or(DomainError::CommandNotFound(id))?;
        entry.team_id = team_id;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn regen_token(&self, id: Snowflake, token: String) -> RepoResult<Command> {
        let mut entry = self
            .commands
            .get_mut(&id)
            .ok_or(DomainError::CommandNotFound(id))?;
        entry.token = token;
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    async fn list_team_commands(&self, team_id: Snowflake) -> RepoResult<Vec<Command>> {
        Ok(self
            .commands
            .iter()
            .filter(|entry| entry.team_id == team_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn list_all_commands(&self, team_id: Snowflake) -> RepoResult<Vec<Command>> {
        let mut commands = self.builtins.clone();
        commands.extend(self.list_team_commands(team_id).await?);
        Ok(commands)
    }

    async fn list_autocomplete_commands(&self, team_id: Snowflake) -> RepoResult<Vec<Command>> {
        let mut commands = self.builtins.clone();
        commands.extend(
            self.list_team_commands(team_id)
                .await?
                .into_iter()
                .filter(|c| c.auto_complete),
        );
        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamline_core::CommandMethod;

    fn custom_command(id: i64, team_id: i64, trigger: &str, auto_complete: bool) -> Command {
        let now = Utc::now();
        Command {
            id: Snowflake::new(id),
            team_id: Snowflake::new(team_id),
            creator_id: Snowflake::new(10),
            trigger: trigger.to_string(),
            token: Command::generate_token(),
            url: "https://example.com/hook".to_string(),
            method: CommandMethod::Post,
            display_name: trigger.to_string(),
            description: String::new(),
            auto_complete,
            auto_complete_desc: String::new(),
            auto_complete_hint: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_trigger_per_team() {
        let repo = InMemoryCommandRepository::new();
        repo.create(custom_command(1, 7, "deploy", true)).await.unwrap();

        let err = repo
            .create(custom_command(2, 7, "deploy", true))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::TriggerAlreadyExists(_)));

        // Same trigger on another team is fine
        repo.create(custom_command(3, 8, "deploy", true)).await.unwrap();
    }

    #[tokio::test]
    async fn test_listing_variants() {
        let repo = InMemoryCommandRepository::new();
        let builtin_count = builtin_commands().len();

        repo.create(custom_command(1, 7, "deploy", true)).await.unwrap();
        repo.create(custom_command(2, 7, "rollback", false)).await.unwrap();

        let team = repo.list_team_commands(Snowflake::new(7)).await.unwrap();
        assert_eq!(team.len(), 2);

        let all = repo.list_all_commands(Snowflake::new(7)).await.unwrap();
        assert_eq!(all.len(), builtin_count + 2);

        // Only autocomplete-enabled customs are merged with builtins
        let ac = repo
            .list_autocomplete_commands(Snowflake::new(7))
            .await
            .unwrap();
        assert_eq!(ac.len(), builtin_count + 1);
    }

    #[tokio::test]
    async fn test_move_and_regen() {
        let repo = InMemoryCommandRepository::new();
        repo.create(custom_command(1, 7, "deploy", true)).await.unwrap();

        let moved = repo
            .move_to_team(Snowflake::new(1), Snowflake::new(9))
            .await
            .unwrap();
        assert_eq!(moved.team_id, Snowflake::new(9));

        let before = repo.find_by_id(Snowflake::new(1)).await.unwrap().unwrap();
        let regen = repo
            .regen_token(Snowflake::new(1), Command::generate_token())
            .await
            .unwrap();
        assert_ne!(regen.token, before.token);
    }

    #[tokio::test]
    async fn test_delete_missing_command() {
        let repo = InMemoryCommandRepository::new();
        let err = repo.delete(Snowflake::new(404)).await.unwrap_err();
        assert!(matches!(err, DomainError::CommandNotFound(_)));
    }
}
