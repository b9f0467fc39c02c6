//! Shared test fixtures: a scripted, call-recording permission oracle,
//! an argument-capturing executor, and a fully wired service context
//! over the in-memory repositories.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use teamline_common::JwtService;
use teamline_core::{
    AuditRecord, AuditSink, AutocompleteSuggestion, Command, CommandArgs, CommandExecutor,
    CommandResponse, PermissionOracle, Permissions, RepoResult, Session, Snowflake,
    SnowflakeGenerator,
};
use teamline_service::{ServiceContext, ServiceContextBuilder};
use teamline_store::{
    InMemoryChannelRepository, InMemoryCommandRepository, InMemoryMemberRepository,
    InMemoryPostRepository, InMemoryReactionRepository, InMemoryRoleRepository,
    InMemoryTeamRepository,
};

/// One recorded permission query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleCall {
    Team(Snowflake),
    Channel(Snowflake),
    Post(Snowflake),
    Global,
}

/// Permission oracle with explicit grants and a call log.
///
/// Everything is denied unless granted, so tests state exactly which
/// checks they expect to pass.
#[derive(Default)]
pub struct RecordingOracle {
    team_grants: Mutex<HashSet<(Snowflake, u64)>>,
    channel_grants: Mutex<HashSet<(Snowflake, u64)>>,
    post_grants: Mutex<HashSet<(Snowflake, u64)>>,
    global_grants: Mutex<HashSet<u64>>,
    calls: Mutex<Vec<OracleCall>>,
}

impl RecordingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_team(&self, team_id: Snowflake, permission: Permissions) {
        self.team_grants
            .lock()
            .unwrap()
            .insert((team_id, permission.bits()));
    }

    pub fn grant_channel(&self, channel_id: Snowflake, permission: Permissions) {
        self.channel_grants
            .lock()
            .unwrap()
            .insert((channel_id, permission.bits()));
    }

    pub fn grant_post(&self, post_id: Snowflake, permission: Permissions) {
        self.post_grants
            .lock()
            .unwrap()
            .insert((post_id, permission.bits()));
    }

    pub fn grant_global(&self, permission: Permissions) {
        self.global_grants.lock().unwrap().insert(permission.bits());
    }

    pub fn calls(&self) -> Vec<OracleCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: OracleCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PermissionOracle for RecordingOracle {
    async fn has_permission_to_team(
        &self,
        _session: &Session,
        team_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool> {
        self.record(OracleCall::Team(team_id));
        Ok(self
            .team_grants
            .lock()
            .unwrap()
            .contains(&(team_id, permission.bits())))
    }

    async fn has_permission_to_channel(
        &self,
        _session: &Session,
        channel_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool> {
        self.record(OracleCall::Channel(channel_id));
        Ok(self
            .channel_grants
            .lock()
            .unwrap()
            .contains(&(channel_id, permission.bits())))
    }

    async fn has_permission_to_channel_by_post(
        &self,
        _session: &Session,
        post_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool> {
        self.record(OracleCall::Post(post_id));
        Ok(self
            .post_grants
            .lock()
            .unwrap()
            .contains(&(post_id, permission.bits())))
    }

    async fn has_global_permission(
        &self,
        _session: &Session,
        permission: Permissions,
    ) -> RepoResult<bool> {
        self.record(OracleCall::Global);
        Ok(self
            .global_grants
            .lock()
            .unwrap()
            .contains(&permission.bits()))
    }
}

/// Executor that captures the args it was invoked with
#[derive(Default)]
pub struct RecordingExecutor {
    last_args: Mutex<Option<CommandArgs>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_args(&self) -> Option<CommandArgs> {
        self.last_args.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, args: &CommandArgs) -> RepoResult<CommandResponse> {
        *self.last_args.lock().unwrap() = Some(args.clone());
        Ok(CommandResponse::ephemeral("ok"))
    }

    async fn suggestions(
        &self,
        args: &CommandArgs,
        _commands: &[Command],
        _role_id: &str,
    ) -> RepoResult<Vec<AutocompleteSuggestion>> {
        *self.last_args.lock().unwrap() = Some(args.clone());
        Ok(Vec::new())
    }
}

/// Audit sink that counts successful and failed records
#[derive(Default)]
pub struct CountingAuditSink {
    pub records: Mutex<Vec<AuditRecord>>,
}

#[async_trait]
impl AuditSink for CountingAuditSink {
    async fn write(&self, record: &AuditRecord) -> RepoResult<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// All handles a test needs
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub oracle: Arc<RecordingOracle>,
    pub executor: Arc<RecordingExecutor>,
    pub audit: Arc<CountingAuditSink>,
    pub teams: Arc<InMemoryTeamRepository>,
    pub channels: Arc<InMemoryChannelRepository>,
    pub posts: Arc<InMemoryPostRepository>,
    pub commands: Arc<InMemoryCommandRepository>,
    pub reactions: Arc<InMemoryReactionRepository>,
}

/// Wire a context over in-memory repositories with the recording oracle
/// and the argument-capturing executor.
pub fn harness() -> TestHarness {
    let teams = Arc::new(InMemoryTeamRepository::new());
    let channels = Arc::new(InMemoryChannelRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new());
    let members = Arc::new(InMemoryMemberRepository::new());
    let roles = Arc::new(InMemoryRoleRepository::new());
    let commands = Arc::new(InMemoryCommandRepository::new());
    let reactions = Arc::new(InMemoryReactionRepository::new());

    let oracle = Arc::new(RecordingOracle::new());
    let executor = Arc::new(RecordingExecutor::new());
    let audit = Arc::new(CountingAuditSink::default());

    let ctx = ServiceContextBuilder::new()
        .team_repo(teams.clone())
        .channel_repo(channels.clone())
        .post_repo(posts.clone())
        .member_repo(members)
        .role_repo(roles)
        .command_repo(commands.clone())
        .reaction_repo(reactions.clone())
        .permission_oracle(oracle.clone())
        .command_executor(executor.clone())
        .audit_sink(audit.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .site_url("http://localhost:8080")
        .build()
        .expect("context builds");

    TestHarness {
        ctx,
        oracle,
        executor,
        audit,
        teams,
        channels,
        posts,
        commands,
        reactions,
    }
}

pub fn session(user_id: i64, team_ids: &[i64], is_admin: bool) -> Session {
    Session::new(
        Snowflake::new(user_id),
        team_ids.iter().map(|id| Snowflake::new(*id)).collect(),
        is_admin,
    )
}
