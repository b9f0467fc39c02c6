//! Entity to DTO conversions

use teamline_core::{Command, Reaction};

use super::responses::{CommandResponseDto, ReactionDto};

impl From<&Command> for CommandResponseDto {
    fn from(command: &Command) -> Self {
        Self {
            id: command.id,
            team_id: command.team_id,
            creator_id: command.creator_id,
            trigger: command.trigger.clone(),
            token: command.token.clone(),
            url: command.url.clone(),
            method: command.method,
            display_name: command.display_name.clone(),
            description: command.description.clone(),
            auto_complete: command.auto_complete,
            auto_complete_desc: command.auto_complete_desc.clone(),
            auto_complete_hint: command.auto_complete_hint.clone(),
            created_at: command.created_at,
            updated_at: command.updated_at,
        }
    }
}

impl From<&Reaction> for ReactionDto {
    fn from(reaction: &Reaction) -> Self {
        Self {
            user_id: reaction.user_id,
            post_id: reaction.post_id,
            emoji_name: reaction.emoji_name.clone(),
            created_at: reaction.created_at,
        }
    }
}
