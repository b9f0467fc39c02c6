//! Slash command entity and execution types

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Session, Snowflake};

/// Length of the shared-secret token sent to command endpoints
pub const TOKEN_LENGTH: usize = 26;

/// HTTP method a custom command endpoint is invoked with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandMethod {
    Get,
    Post,
}

/// A custom slash command registered on a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub id: Snowflake,
    pub team_id: Snowflake,
    pub creator_id: Snowflake,
    /// The word after the leading slash that invokes this command
    pub trigger: String,
    /// Shared secret the receiving endpoint uses to verify requests
    pub token: String,
    pub url: String,
    pub method: CommandMethod,
    pub display_name: String,
    pub description: String,
    pub auto_complete: bool,
    pub auto_complete_desc: String,
    pub auto_complete_hint: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Command {
    /// Generate a fresh verification token
    pub fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Whether the given user created this command
    pub fn is_creator(&self, user_id: Snowflake) -> bool {
        self.creator_id == user_id
    }
}

/// Fully resolved context handed to the executor when a command runs
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub channel_id: Snowflake,
    pub team_id: Snowflake,
    pub user_id: Snowflake,
    pub root_id: Option<Snowflake>,
    pub parent_id: Option<Snowflake>,
    /// Raw message text, including the leading slash
    pub command: String,
    pub site_url: String,
    pub session: Session,
}

/// Where the response of an executed command is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandResponseType {
    /// Posted into the channel for everyone
    InChannel,
    /// Shown only to the invoking user
    Ephemeral,
}

/// Result of executing a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub response_type: CommandResponseType,
    pub text: String,
}

impl CommandResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: CommandResponseType::Ephemeral,
            text: text.into(),
        }
    }

    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: CommandResponseType::InChannel,
            text: text.into(),
        }
    }
}

/// One autocomplete entry offered while the user types a command
#[derive(Debug, Clone, Serialize)]
pub struct AutocompleteSuggestion {
    /// Full replacement text for the input box
    pub complete: String,
    /// The part shown as the suggested token
    pub suggestion: String,
    pub hint: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_length_and_charset() {
        let token = Command::generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_tokens_differ() {
        assert_ne!(Command::generate_token(), Command::generate_token());
    }
}
