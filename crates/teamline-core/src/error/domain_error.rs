//! Domain-level errors raised by repositories and domain services

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Errors originating in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Team not found: {0}")]
    TeamNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Command not found: {0}")]
    CommandNotFound(Snowflake),

    #[error("Role not found: {0}")]
    RoleNotFound(Snowflake),

    #[error("User {user_id} is not a member of team {team_id}")]
    MemberNotFound {
        team_id: Snowflake,
        user_id: Snowflake,
    },

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Trigger already in use: {0}")]
    TriggerAlreadyExists(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable error code for API responses and logging
    pub fn code(&self) -> &'static str {
        match self {
            Self::TeamNotFound(_) => "TEAM_NOT_FOUND",
            Self::ChannelNotFound(_) => "CHANNEL_NOT_FOUND",
            Self::PostNotFound(_) => "POST_NOT_FOUND",
            Self::CommandNotFound(_) => "COMMAND_NOT_FOUND",
            Self::RoleNotFound(_) => "ROLE_NOT_FOUND",
            Self::MemberNotFound { .. } => "MEMBER_NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::TriggerAlreadyExists(_) => "TRIGGER_EXISTS",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
            Self::StoreError(_) => "STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TeamNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommandNotFound(_)
                | Self::RoleNotFound(_)
                | Self::MemberNotFound { .. }
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::UnknownCommand(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::TriggerAlreadyExists(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(DomainError::CommandNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::ValidationError("bad".into()).is_validation());
        assert!(DomainError::TriggerAlreadyExists("echo".into()).is_conflict());
        assert!(!DomainError::StoreError("io".into()).is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DomainError::TeamNotFound(Snowflake::new(9)).code(),
            "TEAM_NOT_FOUND"
        );
        assert_eq!(
            DomainError::UnknownCommand("/nope".into()).code(),
            "UNKNOWN_COMMAND"
        );
    }
}
