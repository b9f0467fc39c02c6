//! Channel entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Channel classification
///
/// Direct and group channels live outside any team, so `Channel::team_id`
/// is `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// Public channel within a team
    Open = 0,
    /// Invite-only channel within a team
    Private = 1,
    /// One-to-one conversation between two users
    Direct = 2,
    /// Ad-hoc conversation between a small set of users
    Group = 3,
}

impl ChannelType {
    /// Whether the channel exists outside team scope
    pub fn is_group_or_direct(&self) -> bool {
        matches!(self, ChannelType::Direct | ChannelType::Group)
    }
}

impl TryFrom<i16> for ChannelType {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChannelType::Open),
            1 => Ok(ChannelType::Private),
            2 => Ok(ChannelType::Direct),
            3 => Ok(ChannelType::Group),
            _ => Err(format!("invalid channel type: {value}")),
        }
    }
}

impl From<ChannelType> for i16 {
    fn from(t: ChannelType) -> Self {
        t as i16
    }
}

/// A channel holds posts; team channels belong to a team, direct and
/// group channels belong only to their recipients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    /// None for direct and group channels
    pub team_id: Option<Snowflake>,
    /// None for direct channels, which are named after their recipients
    pub name: Option<String>,
    pub channel_type: ChannelType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    pub fn new_team_channel(
        id: Snowflake,
        team_id: Snowflake,
        name: String,
        channel_type: ChannelType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            team_id: Some(team_id),
            name: Some(name),
            channel_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_direct(id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            team_id: None,
            name: None,
            channel_type: ChannelType::Direct,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_group(id: Snowflake, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            team_id: None,
            name,
            channel_type: ChannelType::Group,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_type_conversion() {
        assert_eq!(ChannelType::try_from(0).unwrap(), ChannelType::Open);
        assert_eq!(ChannelType::try_from(2).unwrap(), ChannelType::Direct);
        assert!(ChannelType::try_from(9).is_err());
        assert_eq!(i16::from(ChannelType::Group), 3);
    }

    #[test]
    fn test_group_or_direct() {
        assert!(ChannelType::Direct.is_group_or_direct());
        assert!(ChannelType::Group.is_group_or_direct());
        assert!(!ChannelType::Open.is_group_or_direct());
        assert!(!ChannelType::Private.is_group_or_direct());
    }

    #[test]
    fn test_direct_channel_has_no_team() {
        let channel = Channel::new_direct(Snowflake::new(5));
        assert!(channel.team_id.is_none());
        assert!(channel.name.is_none());
    }
}
