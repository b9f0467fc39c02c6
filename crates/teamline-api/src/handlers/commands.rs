//! Slash command handlers
//!
//! Endpoints for managing, listing, and executing slash commands.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use teamline_core::{AutocompleteSuggestion, CommandResponse, Snowflake};
use teamline_service::dto::{
    CommandResponseDto, CreateCommandRequest, ExecuteCommandRequest, MoveCommandRequest,
    RegenTokenResponse, SuggestionQuery, UpdateCommandRequest,
};
use teamline_service::CommandService;

use crate::extractors::{AuthSession, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for listing commands
#[derive(Debug, Deserialize)]
pub struct ListCommandsQuery {
    pub team_id: Option<String>,
    pub custom_only: Option<String>,
}

/// An unparseable flag value counts as false, not as an error
fn parse_custom_only(raw: Option<&str>) -> bool {
    raw.map(|s| s.parse().unwrap_or(false)).unwrap_or(false)
}

/// Create a custom slash command
///
/// POST /commands
pub async fn create_command(
    State(state): State<AppState>,
    auth: AuthSession,
    ValidatedJson(request): ValidatedJson<CreateCommandRequest>,
) -> ApiResult<Created<ApiJson<CommandResponseDto>>> {
    let service = CommandService::new(state.service_context());
    let command = service.create_command(&auth.session, request).await?;
    Ok(Created(ApiJson(CommandResponseDto::from(&command))))
}

/// List commands on a team
///
/// GET /commands?team_id={team_id}&custom_only={bool}
pub async fn list_commands(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(query): Query<ListCommandsQuery>,
) -> ApiResult<ApiJson<Vec<CommandResponseDto>>> {
    let team_id = query
        .team_id
        .as_deref()
        .map(Snowflake::parse_id)
        .transpose()
        .map_err(|_| ApiError::invalid_query("Invalid team_id format"))?;
    let custom_only = parse_custom_only(query.custom_only.as_deref());

    let service = CommandService::new(state.service_context());
    let commands = service
        .list_commands(&auth.session, team_id, custom_only)
        .await?;
    Ok(ApiJson(commands.iter().map(CommandResponseDto::from).collect()))
}

/// Get a single command
///
/// GET /commands/{command_id}
pub async fn get_command(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(command_id): Path<String>,
) -> ApiResult<ApiJson<CommandResponseDto>> {
    let command_id = Snowflake::parse_id(&command_id)
        .map_err(|_| ApiError::invalid_path("Invalid command_id format"))?;

    let service = CommandService::new(state.service_context());
    let command = service.get_command(&auth.session, command_id).await?;
    Ok(ApiJson(CommandResponseDto::from(&command)))
}

/// Replace a command's mutable fields
///
/// PUT /commands/{command_id}
pub async fn update_command(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(command_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCommandRequest>,
) -> ApiResult<ApiJson<CommandResponseDto>> {
    let command_id = Snowflake::parse_id(&command_id)
        .map_err(|_| ApiError::invalid_path("Invalid command_id format"))?;

    let service = CommandService::new(state.service_context());
    let command = service
        .update_command(&auth.session, command_id, request)
        .await?;
    Ok(ApiJson(CommandResponseDto::from(&command)))
}

/// Move a command to another team
///
/// PUT /commands/{command_id}/move
pub async fn move_command(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(command_id): Path<String>,
    Json(request): Json<MoveCommandRequest>,
) -> ApiResult<NoContent> {
    let command_id = Snowflake::parse_id(&command_id)
        .map_err(|_| ApiError::invalid_path("Invalid command_id format"))?;

    let service = CommandService::new(state.service_context());
    service
        .move_command(&auth.session, command_id, request)
        .await?;
    Ok(NoContent)
}

/// Delete a command
///
/// DELETE /commands/{command_id}
pub async fn delete_command(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(command_id): Path<String>,
) -> ApiResult<NoContent> {
    let command_id = Snowflake::parse_id(&command_id)
        .map_err(|_| ApiError::invalid_path("Invalid command_id format"))?;

    let service = CommandService::new(state.service_context());
    service.delete_command(&auth.session, command_id).await?;
    Ok(NoContent)
}

/// Regenerate a command's token
///
/// PUT /commands/{command_id}/regen_token
pub async fn regen_token(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(command_id): Path<String>,
) -> ApiResult<ApiJson<RegenTokenResponse>> {
    let command_id = Snowflake::parse_id(&command_id)
        .map_err(|_| ApiError::invalid_path("Invalid command_id format"))?;

    let service = CommandService::new(state.service_context());
    let token = service.regen_token(&auth.session, command_id).await?;
    Ok(ApiJson(RegenTokenResponse { token }))
}

/// Execute a slash command
///
/// POST /commands/execute
pub async fn execute_command(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(request): Json<ExecuteCommandRequest>,
) -> ApiResult<ApiJson<CommandResponse>> {
    let service = CommandService::new(state.service_context());
    let response = service.execute_command(&auth.session, request).await?;
    Ok(ApiJson(response))
}

/// Commands eligible for autocomplete on a team
///
/// GET /teams/{team_id}/commands/autocomplete
pub async fn list_autocomplete_commands(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(team_id): Path<String>,
) -> ApiResult<ApiJson<Vec<CommandResponseDto>>> {
    let team_id = Snowflake::parse_id(&team_id)
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = CommandService::new(state.service_context());
    let commands = service
        .list_autocomplete_commands(&auth.session, team_id)
        .await?;
    Ok(ApiJson(commands.iter().map(CommandResponseDto::from).collect()))
}

/// Autocomplete suggestions for a partial command input
///
/// GET /teams/{team_id}/commands/autocomplete_suggestions?user_input={input}
pub async fn autocomplete_suggestions(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(team_id): Path<String>,
    Query(query): Query<SuggestionQuery>,
) -> ApiResult<ApiJson<Vec<AutocompleteSuggestion>>> {
    let team_id = Snowflake::parse_id(&team_id)
        .map_err(|_| ApiError::invalid_path("Invalid team_id format"))?;

    let service = CommandService::new(state.service_context());
    let suggestions = service
        .autocomplete_suggestions(&auth.session, team_id, query)
        .await?;
    Ok(ApiJson(suggestions))
}
