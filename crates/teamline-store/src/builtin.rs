//! Built-in slash commands and their executor

use async_trait::async_trait;
use chrono::Utc;
use teamline_core::{
    AutocompleteSuggestion, Command, CommandArgs, CommandExecutor, CommandMethod, CommandResponse,
    DomainError, RepoResult, Snowflake, SYSTEM_ADMIN_ROLE_ID,
};

/// Sentinel team id carried by built-in commands, which belong to no team
pub const BUILTIN_TEAM_ID: Snowflake = Snowflake::new(0);

/// Triggers only visible to and usable by system administrators
const ADMIN_ONLY_TRIGGERS: &[&str] = &["system"];

const SHRUG: &str = r"¯\_(ツ)_/¯";

fn builtin(trigger: &str, hint: &str, description: &str) -> Command {
    let now = Utc::now();
    Command {
        id: BUILTIN_TEAM_ID,
        team_id: BUILTIN_TEAM_ID,
        creator_id: BUILTIN_TEAM_ID,
        trigger: trigger.to_string(),
        token: String::new(),
        url: String::new(),
        method: CommandMethod::Post,
        display_name: trigger.to_string(),
        description: description.to_string(),
        auto_complete: true,
        auto_complete_desc: description.to_string(),
        auto_complete_hint: hint.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// The full built-in command set, including admin-only entries
#[must_use]
pub fn builtin_commands() -> Vec<Command> {
    vec![
        builtin("away", "", "Set your status to away"),
        builtin("echo", "[message]", "Echo a message back into the channel"),
        builtin("shrug", "[message]", "Append a shrug to your message"),
        builtin("system", "[subcommand]", "Inspect system state"),
    ]
}

/// Executes built-in commands and ranks autocomplete suggestions
#[derive(Debug, Clone, Default)]
pub struct BuiltinCommandExecutor;

impl BuiltinCommandExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Split `/trigger rest of message` into its trigger and remainder
fn split_command(command: &str) -> (&str, &str) {
    let stripped = command.strip_prefix('/').unwrap_or(command);
    match stripped.split_once(char::is_whitespace) {
        Some((trigger, rest)) => (trigger, rest.trim()),
        None => (stripped, ""),
    }
}

#[async_trait]
impl CommandExecutor for BuiltinCommandExecutor {
    async fn execute(&self, args: &CommandArgs) -> RepoResult<CommandResponse> {
        let (trigger, message) = split_command(&args.command);

        // Admin-only commands behave as unknown for everyone else
        if ADMIN_ONLY_TRIGGERS.contains(&trigger) && !args.session.is_admin {
            return Err(DomainError::UnknownCommand(args.command.clone()));
        }

        match trigger {
            "away" => Ok(CommandResponse::ephemeral("You are now away")),
            "echo" => Ok(CommandResponse::in_channel(message)),
            "shrug" => {
                let text = if message.is_empty() {
                    SHRUG.to_string()
                } else {
                    format!("{message} {SHRUG}")
                };
                Ok(CommandResponse::in_channel(text))
            }
            "system" => Ok(CommandResponse::ephemeral("System is healthy")),
            _ => Err(DomainError::UnknownCommand(args.command.clone())),
        }
    }

    async fn suggestions(
        &self,
        args: &CommandArgs,
        commands: &[Command],
        role_id: &str,
    ) -> RepoResult<Vec<AutocompleteSuggestion>> {
        let (input, _) = split_command(&args.command);

        let mut matched: Vec<&Command> = commands
            .iter()
            .filter(|c| c.trigger.starts_with(input))
            .filter(|c| {
                !ADMIN_ONLY_TRIGGERS.contains(&c.trigger.as_str())
                    || role_id == SYSTEM_ADMIN_ROLE_ID
            })
            .collect();
        matched.sort_by(|a, b| a.trigger.cmp(&b.trigger));

        Ok(matched
            .into_iter()
            .map(|c| AutocompleteSuggestion {
                complete: format!("/{}", c.trigger),
                suggestion: format!("/{}", c.trigger),
                hint: c.auto_complete_hint.clone(),
                description: c.auto_complete_desc.clone(),
            })
            .collect())
    }
}
