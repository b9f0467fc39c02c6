//! Command executor seam

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::entities::{AutocompleteSuggestion, Command, CommandArgs, CommandResponse};

/// Runs slash commands and produces autocomplete suggestions
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute the command named in `args.command`
    async fn execute(&self, args: &CommandArgs) -> RepoResult<CommandResponse>;

    /// Rank `commands` against the partial input in `args.command`.
    ///
    /// `role_id` scopes built-in commands that only some roles may see.
    async fn suggestions(
        &self,
        args: &CommandArgs,
        commands: &[Command],
        role_id: &str,
    ) -> RepoResult<Vec<AutocompleteSuggestion>>;
}
