//! Slash command service
//!
//! Routes every command operation through the tiered permission checks:
//! team-level management first, then creator-or-administrative override.
//! Failing the first tier reports the command as missing so callers
//! cannot probe for ids on teams they do not manage.

use chrono::Utc;
use teamline_core::{
    AuditRecord, AutocompleteSuggestion, Command, CommandArgs, CommandResponse, Permissions,
    Session, Snowflake,
};
use tracing::{info, instrument};

use crate::dto::{
    CreateCommandRequest, ExecuteCommandRequest, MoveCommandRequest, SuggestionQuery,
    UpdateCommandRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Slash command service
pub struct CommandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommandService<'a> {
    /// Create a new CommandService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a custom slash command on a team
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn create_command(
        &self,
        session: &Session,
        request: CreateCommandRequest,
    ) -> ServiceResult<Command> {
        let mut record = AuditRecord::new("create_command", session.user_id);
        record.add_meta("team_id", request.team_id.to_string());
        record.add_meta("trigger", request.trigger.clone());

        let result = self.do_create(session, request).await;
        if let Ok(command) = &result {
            record.add_meta("command_id", command.id.to_string());
        }
        self.write_audit(record, result.is_ok()).await;
        result
    }

    async fn do_create(
        &self,
        session: &Session,
        request: CreateCommandRequest,
    ) -> ServiceResult<Command> {
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, request.team_id, Permissions::MANAGE_SLASH_COMMANDS)
            .await?
        {
            return Err(ServiceError::permission_denied("MANAGE_SLASH_COMMANDS"));
        }

        let now = Utc::now();
        let command = Command {
            id: self.ctx.generate_id(),
            team_id: request.team_id,
            // Creator is always the actor, regardless of the payload
            creator_id: session.user_id,
            trigger: request.trigger.trim_start_matches('/').to_string(),
            token: Command::generate_token(),
            url: request.url,
            method: request.method,
            display_name: request.display_name,
            description: request.description,
            auto_complete: request.auto_complete,
            auto_complete_desc: request.auto_complete_desc,
            auto_complete_hint: request.auto_complete_hint,
            created_at: now,
            updated_at: now,
        };

        let command = self.ctx.command_repo().create(command).await?;

        info!(
            command_id = %command.id,
            team_id = %command.team_id,
            trigger = %command.trigger,
            "Command created"
        );

        Ok(command)
    }

    /// Fetch a single command
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn get_command(
        &self,
        session: &Session,
        command_id: Snowflake,
    ) -> ServiceResult<Command> {
        let command = self
            .ctx
            .command_repo()
            .find_by_id(command_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", command_id))?;

        // Both failures report the command as missing so its existence
        // is not revealed to users outside the team.
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, command.team_id, Permissions::VIEW_TEAM)
            .await?
        {
            return Err(ServiceError::not_found("Command", command_id));
        }

        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, command.team_id, Permissions::MANAGE_SLASH_COMMANDS)
            .await?
        {
            return Err(ServiceError::not_found("Command", command_id));
        }

        Ok(command)
    }

    /// List commands visible to the caller on a team
    ///
    /// Without manage rights only the system (autocomplete-visible) set is
    /// returned; with manage rights the union of system and custom
    /// commands; `custom_only` restricts to team-owned customs and
    /// requires manage rights outright.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_commands(
        &self,
        session: &Session,
        team_id: Option<Snowflake>,
        custom_only: bool,
    ) -> ServiceResult<Vec<Command>> {
        let team_id = team_id.ok_or_else(|| ServiceError::invalid_parameter("team_id"))?;

        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, team_id, Permissions::VIEW_TEAM)
            .await?
        {
            return Err(ServiceError::permission_denied("VIEW_TEAM"));
        }

        let can_manage = self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, team_id, Permissions::MANAGE_SLASH_COMMANDS)
            .await?;

        if custom_only {
            if !can_manage {
                return Err(ServiceError::permission_denied("MANAGE_SLASH_COMMANDS"));
            }
            return Ok(self.ctx.command_repo().list_team_commands(team_id).await?);
        }

        if can_manage {
            Ok(self.ctx.command_repo().list_all_commands(team_id).await?)
        } else {
            let mut commands = self
                .ctx
                .command_repo()
                .list_autocomplete_commands(team_id)
                .await?;
            // Tokens are only ever shown to managers
            for command in &mut commands {
                command.token.clear();
            }
            Ok(commands)
        }
    }

    /// Replace a command's mutable fields
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn update_command(
        &self,
        session: &Session,
        command_id: Snowflake,
        request: UpdateCommandRequest,
    ) -> ServiceResult<Command> {
        let mut record = AuditRecord::new("update_command", session.user_id);
        record.add_meta("command_id", command_id.to_string());

        let result = self.do_update(session, command_id, request).await;
        self.write_audit(record, result.is_ok()).await;
        result
    }

    async fn do_update(
        &self,
        session: &Session,
        command_id: Snowflake,
        request: UpdateCommandRequest,
    ) -> ServiceResult<Command> {
        let stored = self
            .ctx
            .command_repo()
            .find_by_id(command_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", command_id))?;

        if request.team_id != stored.team_id {
            return Err(ServiceError::bad_request(
                "team id does not match the command's team",
            ));
        }

        self.require_manage_tiers(session, &stored).await?;

        // Token, creator, and creation time survive the update
        let updated = Command {
            id: stored.id,
            team_id: stored.team_id,
            creator_id: stored.creator_id,
            trigger: request.trigger.trim_start_matches('/').to_string(),
            token: stored.token,
            url: request.url,
            method: request.method,
            display_name: request.display_name,
            description: request.description,
            auto_complete: request.auto_complete,
            auto_complete_desc: request.auto_complete_desc,
            auto_complete_hint: request.auto_complete_hint,
            created_at: stored.created_at,
            updated_at: Utc::now(),
        };

        let updated = self.ctx.command_repo().update(updated).await?;

        info!(command_id = %updated.id, "Command updated");

        Ok(updated)
    }

    /// Move a command to another team
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn move_command(
        &self,
        session: &Session,
        command_id: Snowflake,
        request: MoveCommandRequest,
    ) -> ServiceResult<()> {
        let mut record = AuditRecord::new("move_command", session.user_id);
        record.add_meta("command_id", command_id.to_string());
        record.add_meta("destination_team_id", request.team_id.clone());

        let result = self.do_move(session, command_id, request).await;
        self.write_audit(record, result.is_ok()).await;
        result
    }

    async fn do_move(
        &self,
        session: &Session,
        command_id: Snowflake,
        request: MoveCommandRequest,
    ) -> ServiceResult<()> {
        let team_id = Snowflake::parse_id(&request.team_id)
            .map_err(|_| ServiceError::invalid_parameter("team_id"))?;

        // Destination is resolved first; a missing destination is a real
        // not-found, never masked.
        let team = self
            .ctx
            .team_repo()
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", team_id))?;

        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, team.id, Permissions::MANAGE_SLASH_COMMANDS)
            .await?
        {
            return Err(ServiceError::permission_denied("MANAGE_SLASH_COMMANDS"));
        }

        let command = self
            .ctx
            .command_repo()
            .find_by_id(command_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", command_id))?;

        // Failing manage on the source team reports the command as missing
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, command.team_id, Permissions::MANAGE_SLASH_COMMANDS)
            .await?
        {
            return Err(ServiceError::not_found("Command", command_id));
        }

        self.ctx
            .command_repo()
            .move_to_team(command_id, team.id)
            .await?;

        info!(command_id = %command_id, team_id = %team.id, "Command moved");

        Ok(())
    }

    /// Delete a command
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete_command(
        &self,
        session: &Session,
        command_id: Snowflake,
    ) -> ServiceResult<()> {
        let mut record = AuditRecord::new("delete_command", session.user_id);
        record.add_meta("command_id", command_id.to_string());

        let result = self.do_delete(session, command_id).await;
        self.write_audit(record, result.is_ok()).await;
        result
    }

    async fn do_delete(&self, session: &Session, command_id: Snowflake) -> ServiceResult<()> {
        let command = self
            .ctx
            .command_repo()
            .find_by_id(command_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", command_id))?;

        self.require_manage_tiers(session, &command).await?;

        self.ctx.command_repo().delete(command_id).await?;

        info!(command_id = %command_id, "Command deleted");

        Ok(())
    }

    /// Regenerate a command's verification token
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn regen_token(
        &self,
        session: &Session,
        command_id: Snowflake,
    ) -> ServiceResult<String> {
        let mut record = AuditRecord::new("regen_command_token", session.user_id);
        record.add_meta("command_id", command_id.to_string());

        let result = self.do_regen_token(session, command_id).await;
        self.write_audit(record, result.is_ok()).await;
        result
    }

    async fn do_regen_token(
        &self,
        session: &Session,
        command_id: Snowflake,
    ) -> ServiceResult<String> {
        let command = self
            .ctx
            .command_repo()
            .find_by_id(command_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Command", command_id))?;

        self.require_manage_tiers(session, &command).await?;

        let updated = self
            .ctx
            .command_repo()
            .regen_token(command_id, Command::generate_token())
            .await?;

        info!(command_id = %command_id, "Command token regenerated");

        Ok(updated.token)
    }

    /// Execute a slash command typed into a channel
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn execute_command(
        &self,
        session: &Session,
        request: ExecuteCommandRequest,
    ) -> ServiceResult<CommandResponse> {
        let mut record = AuditRecord::new("execute_command", session.user_id);
        record.add_meta("channel_id", request.channel_id.clone());

        let result = self.do_execute(session, request).await;
        self.write_audit(record, result.is_ok()).await;
        result
    }

    async fn do_execute(
        &self,
        session: &Session,
        request: ExecuteCommandRequest,
    ) -> ServiceResult<CommandResponse> {
        // Structural validation happens before any permission query
        if !request.command.starts_with('/') || request.command.len() <= 1 {
            return Err(ServiceError::bad_request(
                "command must start with a slash and name a trigger",
            ));
        }

        let channel_id = Snowflake::parse_id(&request.channel_id)
            .map_err(|_| ServiceError::bad_request("invalid channel_id"))?;

        let requested_team = request
            .team_id
            .as_deref()
            .map(Snowflake::parse_id)
            .transpose()
            .map_err(|_| ServiceError::bad_request("invalid team_id"))?;

        let root_id = request
            .root_id
            .as_deref()
            .map(Snowflake::parse_id)
            .transpose()
            .map_err(|_| ServiceError::bad_request("invalid root_id"))?;

        let parent_id = request
            .parent_id
            .as_deref()
            .map(Snowflake::parse_id)
            .transpose()
            .map_err(|_| ServiceError::bad_request("invalid parent_id"))?;

        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_channel(session, channel_id, Permissions::USE_SLASH_COMMANDS)
            .await?
        {
            return Err(ServiceError::permission_denied("USE_SLASH_COMMANDS"));
        }

        let channel = self
            .ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Channel", channel_id))?;

        let team_id = if channel.channel_type.is_group_or_direct() {
            // Outside team channels the client's team is honored only for
            // members; everyone else needs the global grant.
            match requested_team {
                Some(team_id) if session.is_member_of(team_id) => team_id,
                other => {
                    if !self
                        .ctx
                        .permission_oracle()
                        .has_global_permission(session, Permissions::USE_SLASH_COMMANDS)
                        .await?
                    {
                        return Err(ServiceError::permission_denied("USE_SLASH_COMMANDS"));
                    }
                    other.unwrap_or_default()
                }
            }
        } else {
            // The channel's team always wins over the client's claim
            channel
                .team_id
                .ok_or_else(|| ServiceError::internal("team channel without a team id"))?
        };

        let args = CommandArgs {
            channel_id,
            team_id,
            user_id: session.user_id,
            root_id,
            parent_id,
            command: request.command,
            site_url: self.ctx.site_url().to_string(),
            session: session.clone(),
        };

        let response = self.ctx.command_executor().execute(&args).await?;

        info!(
            channel_id = %channel_id,
            team_id = %team_id,
            "Command executed"
        );

        Ok(response)
    }

    /// Commands eligible for autocomplete on a team
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_autocomplete_commands(
        &self,
        session: &Session,
        team_id: Snowflake,
    ) -> ServiceResult<Vec<Command>> {
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, team_id, Permissions::VIEW_TEAM)
            .await?
        {
            return Err(ServiceError::permission_denied("VIEW_TEAM"));
        }

        let mut commands = self
            .ctx
            .command_repo()
            .list_autocomplete_commands(team_id)
            .await?;
        // Tokens are only ever shown to managers
        for command in &mut commands {
            command.token.clear();
        }
        Ok(commands)
    }

    /// Rank autocomplete suggestions for a partial command input
    #[instrument(skip(self, session, query), fields(user_id = %session.user_id))]
    pub async fn autocomplete_suggestions(
        &self,
        session: &Session,
        team_id: Snowflake,
        query: SuggestionQuery,
    ) -> ServiceResult<Vec<AutocompleteSuggestion>> {
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, team_id, Permissions::VIEW_TEAM)
            .await?
        {
            return Err(ServiceError::permission_denied("VIEW_TEAM"));
        }

        if query.user_input.is_empty() {
            return Err(ServiceError::invalid_parameter("user_input"));
        }

        let channel_id = query
            .channel_id
            .as_deref()
            .map(Snowflake::parse_id)
            .transpose()
            .map_err(|_| ServiceError::bad_request("invalid channel_id"))?;

        let root_id = query
            .root_id
            .as_deref()
            .map(Snowflake::parse_id)
            .transpose()
            .map_err(|_| ServiceError::bad_request("invalid root_id"))?;

        let parent_id = query
            .parent_id
            .as_deref()
            .map(Snowflake::parse_id)
            .transpose()
            .map_err(|_| ServiceError::bad_request("invalid parent_id"))?;

        let commands = self
            .ctx
            .command_repo()
            .list_autocomplete_commands(team_id)
            .await?;

        let input = query.user_input.trim_start_matches('/').to_string();
        let args = CommandArgs {
            channel_id: channel_id.unwrap_or_default(),
            team_id,
            user_id: session.user_id,
            root_id,
            parent_id,
            command: input,
            site_url: self.ctx.site_url().to_string(),
            session: session.clone(),
        };

        Ok(self
            .ctx
            .command_executor()
            .suggestions(&args, &commands, session.system_role_id())
            .await?)
    }

    /// Tier 1: team manage, failure masked as not-found. Tier 2: creator
    /// or the administrative override, failure reported as denied.
    async fn require_manage_tiers(
        &self,
        session: &Session,
        command: &Command,
    ) -> ServiceResult<()> {
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_team(session, command.team_id, Permissions::MANAGE_SLASH_COMMANDS)
            .await?
        {
            return Err(ServiceError::not_found("Command", command.id));
        }

        if !command.is_creator(session.user_id)
            && !self
                .ctx
                .permission_oracle()
                .has_permission_to_team(
                    session,
                    command.team_id,
                    Permissions::MANAGE_OTHERS_SLASH_COMMANDS,
                )
                .await?
        {
            return Err(ServiceError::permission_denied(
                "MANAGE_OTHERS_SLASH_COMMANDS",
            ));
        }

        Ok(())
    }

    /// Audit failures never fail the operation itself
    async fn write_audit(&self, mut record: AuditRecord, succeeded: bool) {
        if succeeded {
            record.success();
        }
        self.ctx.audit_sink().write(&record).await.ok();
    }
}
