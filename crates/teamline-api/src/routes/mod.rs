//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{commands, health, reactions};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately so probes skip the API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(command_routes())
        .merge(reaction_routes())
}

/// Slash command routes
fn command_routes() -> Router<AppState> {
    Router::new()
        // Command CRUD
        .route("/commands", post(commands::create_command))
        .route("/commands", get(commands::list_commands))
        .route("/commands/execute", post(commands::execute_command))
        .route("/commands/:command_id", get(commands::get_command))
        .route("/commands/:command_id", put(commands::update_command))
        .route("/commands/:command_id", delete(commands::delete_command))
        .route("/commands/:command_id/move", put(commands::move_command))
        .route("/commands/:command_id/regen_token", put(commands::regen_token))
        // Autocomplete
        .route(
            "/teams/:team_id/commands/autocomplete",
            get(commands::list_autocomplete_commands),
        )
        .route(
            "/teams/:team_id/commands/autocomplete_suggestions",
            get(commands::autocomplete_suggestions),
        )
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reactions", post(reactions::save_reaction))
        .route("/posts/:post_id/reactions", get(reactions::get_reactions))
        .route("/posts/ids/reactions", post(reactions::bulk_reactions))
        .route(
            "/users/:user_id/posts/:post_id/reactions/:emoji_name",
            delete(reactions::delete_reaction),
        )
}
