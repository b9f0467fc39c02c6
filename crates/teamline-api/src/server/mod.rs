//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use teamline_common::{AppConfig, AppError, JwtService, TracingAuditSink};
use teamline_core::SnowflakeGenerator;
use teamline_service::{PermissionService, ServiceContextBuilder};
use teamline_store::{
    BuiltinCommandExecutor, InMemoryChannelRepository, InMemoryCommandRepository,
    InMemoryMemberRepository, InMemoryPostRepository, InMemoryReactionRepository,
    InMemoryRoleRepository, InMemoryTeamRepository,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware_with_config, apply_middleware};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let router = create_router();
    let router = apply_middleware_with_config(
        router,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());
    router.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create repositories
    let team_repo = Arc::new(InMemoryTeamRepository::new());
    let channel_repo = Arc::new(InMemoryChannelRepository::new());
    let post_repo = Arc::new(InMemoryPostRepository::new());
    let member_repo = Arc::new(InMemoryMemberRepository::new());
    let role_repo = Arc::new(InMemoryRoleRepository::new());
    let command_repo = Arc::new(InMemoryCommandRepository::new());
    let reaction_repo = Arc::new(InMemoryReactionRepository::new());

    // Permission oracle resolving grants through the repositories
    let permission_oracle = Arc::new(PermissionService::new(
        team_repo.clone(),
        channel_repo.clone(),
        post_repo.clone(),
        member_repo.clone(),
        role_repo.clone(),
    ));

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .team_repo(team_repo)
        .channel_repo(channel_repo)
        .post_repo(post_repo)
        .member_repo(member_repo)
        .role_repo(role_repo)
        .command_repo(command_repo)
        .reaction_repo(reaction_repo)
        .permission_oracle(permission_oracle)
        .command_executor(Arc::new(BuiltinCommandExecutor::new()))
        .audit_sink(Arc::new(TracingAuditSink::default()))
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .site_url(config.site_url.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
