//! Service context - dependency container for services
//!
//! Holds all repositories and shared infrastructure needed by services.

use std::sync::Arc;

use teamline_common::auth::JwtService;
use teamline_core::traits::{
    AuditSink, ChannelRepository, CommandExecutor, CommandRepository, MemberRepository,
    PermissionOracle, PostRepository, ReactionRepository, RoleRepository, TeamRepository,
};
use teamline_core::SnowflakeGenerator;

/// Service context containing all dependencies
///
/// The dependency container passed to every service. Provides access to:
/// - Repositories
/// - The permission oracle answering authorization questions
/// - The command executor running slash commands
/// - The audit sink for mutating command operations
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    team_repo: Arc<dyn TeamRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    post_repo: Arc<dyn PostRepository>,
    member_repo: Arc<dyn MemberRepository>,
    role_repo: Arc<dyn RoleRepository>,
    command_repo: Arc<dyn CommandRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Seams
    permission_oracle: Arc<dyn PermissionOracle>,
    command_executor: Arc<dyn CommandExecutor>,
    audit_sink: Arc<dyn AuditSink>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Base URL handed to command endpoints
    site_url: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        team_repo: Arc<dyn TeamRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        post_repo: Arc<dyn PostRepository>,
        member_repo: Arc<dyn MemberRepository>,
        role_repo: Arc<dyn RoleRepository>,
        command_repo: Arc<dyn CommandRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        permission_oracle: Arc<dyn PermissionOracle>,
        command_executor: Arc<dyn CommandExecutor>,
        audit_sink: Arc<dyn AuditSink>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        site_url: String,
    ) -> Self {
        Self {
            team_repo,
            channel_repo,
            post_repo,
            member_repo,
            role_repo,
            command_repo,
            reaction_repo,
            permission_oracle,
            command_executor,
            audit_sink,
            jwt_service,
            snowflake_generator,
            site_url,
        }
    }

    // === Repositories ===

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    /// Get the command repository
    pub fn command_repo(&self) -> &dyn CommandRepository {
        self.command_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Seams ===

    /// Get the permission oracle
    pub fn permission_oracle(&self) -> &dyn PermissionOracle {
        self.permission_oracle.as_ref()
    }

    /// Get the command executor
    pub fn command_executor(&self) -> &dyn CommandExecutor {
        self.command_executor.as_ref()
    }

    /// Get the audit sink
    pub fn audit_sink(&self) -> &dyn AuditSink {
        self.audit_sink.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> teamline_core::Snowflake {
        self.snowflake_generator.generate()
    }

    /// Base URL of this deployment
    pub fn site_url(&self) -> &str {
        &self.site_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("site_url", &self.site_url)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    team_repo: Option<Arc<dyn TeamRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    command_repo: Option<Arc<dyn CommandRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    permission_oracle: Option<Arc<dyn PermissionOracle>>,
    command_executor: Option<Arc<dyn CommandExecutor>>,
    audit_sink: Option<Arc<dyn AuditSink>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    site_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn command_repo(mut self, repo: Arc<dyn CommandRepository>) -> Self {
        self.command_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn permission_oracle(mut self, oracle: Arc<dyn PermissionOracle>) -> Self {
        self.permission_oracle = Some(oracle);
        self
    }

    pub fn command_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.command_executor = Some(executor);
        self
    }

    pub fn audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit_sink = Some(sink);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = Some(site_url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::BadRequest` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.team_repo
                .ok_or_else(|| ServiceError::bad_request("team_repo is required"))?,
            self.channel_repo
                .ok_or_else(|| ServiceError::bad_request("channel_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::bad_request("post_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::bad_request("member_repo is required"))?,
            self.role_repo
                .ok_or_else(|| ServiceError::bad_request("role_repo is required"))?,
            self.command_repo
                .ok_or_else(|| ServiceError::bad_request("command_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::bad_request("reaction_repo is required"))?,
            self.permission_oracle
                .ok_or_else(|| ServiceError::bad_request("permission_oracle is required"))?,
            self.command_executor
                .ok_or_else(|| ServiceError::bad_request("command_executor is required"))?,
            self.audit_sink
                .ok_or_else(|| ServiceError::bad_request("audit_sink is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::bad_request("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::bad_request("snowflake_generator is required"))?,
            self.site_url
                .ok_or_else(|| ServiceError::bad_request("site_url is required"))?,
        ))
    }
}
