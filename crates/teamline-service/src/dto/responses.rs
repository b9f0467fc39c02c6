//! Response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use teamline_core::{CommandMethod, Snowflake};

/// Slash command as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponseDto {
    pub id: Snowflake,
    pub team_id: Snowflake,
    pub creator_id: Snowflake,
    pub trigger: String,
    /// Blanked unless the caller may manage the command
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

/// Reaction as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct ReactionDto {
    pub user_id: Snowflake,
    pub post_id: Snowflake,
    pub emoji_name: String,
    pub created_at: DateTime<Utc>,
}

/// Result of regenerating a command token
#[derive(Debug, Clone, Serialize)]
pub struct RegenTokenResponse {
    pub token: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
