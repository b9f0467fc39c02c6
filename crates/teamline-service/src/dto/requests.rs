//! Request DTOs

use serde::Deserialize;
use teamline_core::{CommandMethod, Snowflake};
use validator::Validate;

/// Create a custom slash command
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommandRequest {
    pub team_id: Snowflake,

    #[validate(length(min = 1, max = 128))]
    pub trigger: String,

    #[validate(url)]
    pub url: String,

    pub method: CommandMethod,

    #[validate(length(max = 64))]
    #[serde(default)]
    pub display_name: String,

    #[validate(length(max = 128))]
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub auto_complete: bool,

    #[serde(default)]
    pub auto_complete_desc: String,

    #[serde(default)]
    pub auto_complete_hint: String,
}

/// Full replacement of a command's mutable fields
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommandRequest {
    pub team_id: Snowflake,

    #[validate(length(min = 1, max = 128))]
    pub trigger: String,

    #[validate(url)]
    pub url: String,

    pub method: CommandMethod,

    #[validate(length(max = 64))]
    #[serde(default)]
    pub display_name: String,

    #[validate(length(max = 128))]
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub auto_complete: bool,

    #[serde(default)]
    pub auto_complete_desc: String,

    #[serde(default)]
    pub auto_complete_hint: String,
}

/// Move a command to another team
///
/// The id is kept raw so the service can report a malformed value as an
/// invalid parameter rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveCommandRequest {
    pub team_id: String,
}

/// Execute a slash command
///
/// Ids arrive as raw strings; the service validates them before touching
/// any other state.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteCommandRequest {
    pub channel_id: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub root_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub command: String,
}

/// Save an emoji reaction on a post
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReactionRequest {
    pub user_id: String,
    pub post_id: String,
    pub emoji_name: String,
}

/// Query for autocomplete suggestions while the user types a command
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub root_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}
