//! Reaction service
//!
//! Authorizes adding, removing, and listing emoji reactions. Channel
//! access is always resolved through the post.

use std::collections::HashMap;

use teamline_core::{Permissions, Reaction, Session, Snowflake, EMOJI_NAME_MAX_LENGTH};
use tracing::{info, instrument};

use crate::dto::SaveReactionRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Save a reaction on a post
    #[instrument(skip(self, session, request), fields(user_id = %session.user_id))]
    pub async fn save_reaction(
        &self,
        session: &Session,
        request: SaveReactionRequest,
    ) -> ServiceResult<Reaction> {
        let user_id = Snowflake::parse_id(&request.user_id)
            .map_err(|_| ServiceError::bad_request("invalid user_id"))?;
        let post_id = Snowflake::parse_id(&request.post_id)
            .map_err(|_| ServiceError::bad_request("invalid post_id"))?;

        if request.emoji_name.is_empty() || request.emoji_name.len() > EMOJI_NAME_MAX_LENGTH {
            return Err(ServiceError::bad_request("invalid emoji_name"));
        }

        // Reactions are never placed on behalf of another user
        if user_id != session.user_id {
            return Err(ServiceError::forbidden(
                "cannot save a reaction for another user",
            ));
        }

        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_channel_by_post(session, post_id, Permissions::ADD_REACTION)
            .await?
        {
            return Err(ServiceError::permission_denied("ADD_REACTION"));
        }

        let reaction = self
            .ctx
            .reaction_repo()
            .save(Reaction::new(user_id, post_id, request.emoji_name))
            .await?;

        info!(
            post_id = %post_id,
            emoji = %reaction.emoji_name,
            "Reaction saved"
        );

        Ok(reaction)
    }

    /// List reactions on a single post
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn get_reactions(
        &self,
        session: &Session,
        post_id: Snowflake,
    ) -> ServiceResult<Vec<Reaction>> {
        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_channel_by_post(session, post_id, Permissions::READ_CHANNEL)
            .await?
        {
            return Err(ServiceError::permission_denied("READ_CHANNEL"));
        }

        Ok(self.ctx.reaction_repo().find_by_post(post_id).await?)
    }

    /// Remove a reaction
    ///
    /// Removing another user's reaction additionally requires the global
    /// `REMOVE_OTHERS_REACTIONS` grant.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete_reaction(
        &self,
        session: &Session,
        user_id: Snowflake,
        post_id: Snowflake,
        emoji_name: &str,
    ) -> ServiceResult<()> {
        if emoji_name.is_empty() || emoji_name.len() > EMOJI_NAME_MAX_LENGTH {
            return Err(ServiceError::bad_request("invalid emoji_name"));
        }

        if !self
            .ctx
            .permission_oracle()
            .has_permission_to_channel_by_post(session, post_id, Permissions::REMOVE_REACTION)
            .await?
        {
            return Err(ServiceError::permission_denied("REMOVE_REACTION"));
        }

        if user_id != session.user_id
            && !self
                .ctx
                .permission_oracle()
                .has_global_permission(session, Permissions::REMOVE_OTHERS_REACTIONS)
                .await?
        {
            return Err(ServiceError::permission_denied("REMOVE_OTHERS_REACTIONS"));
        }

        self.ctx
            .reaction_repo()
            .delete(user_id, post_id, emoji_name)
            .await?;

        info!(
            post_id = %post_id,
            target_user_id = %user_id,
            emoji = %emoji_name,
            "Reaction removed"
        );

        Ok(())
    }

    /// Reactions for many posts at once
    ///
    /// Access to every post is verified in input order before any
    /// reaction data is fetched; the first denial aborts the whole
    /// request.
    #[instrument(skip(self, session, post_ids), fields(user_id = %session.user_id))]
    pub async fn bulk_reactions(
        &self,
        session: &Session,
        post_ids: Vec<Snowflake>,
    ) -> ServiceResult<HashMap<Snowflake, Vec<Reaction>>> {
        for post_id in &post_ids {
            if !self
                .ctx
                .permission_oracle()
                .has_permission_to_channel_by_post(session, *post_id, Permissions::READ_CHANNEL)
                .await?
            {
                return Err(ServiceError::permission_denied("READ_CHANNEL"));
            }
        }

        Ok(self.ctx.reaction_repo().find_by_post_ids(&post_ids).await?)
    }
}
