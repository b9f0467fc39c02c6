//! Permission flags for role-based access control

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Capability flags carried by roles and evaluated per team or channel
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u64 {
        /// View a channel and read its posts
        const READ_CHANNEL = 1 << 0;
        /// View a team and its public metadata
        const VIEW_TEAM = 1 << 1;
        /// Invoke slash commands
        const USE_SLASH_COMMANDS = 1 << 2;
        /// Create, edit, and delete own slash commands on a team
        const MANAGE_SLASH_COMMANDS = 1 << 3;
        /// Edit and delete slash commands created by other users
        const MANAGE_OTHERS_SLASH_COMMANDS = 1 << 4;
        /// Add an emoji reaction to a post
        const ADD_REACTION = 1 << 5;
        /// Remove own emoji reaction from a post
        const REMOVE_REACTION = 1 << 6;
        /// Remove reactions placed by other users
        const REMOVE_OTHERS_REACTIONS = 1 << 7;
        /// Grants every permission, bypassing all other checks
        const ADMINISTRATOR = 1 << 8;

        /// Baseline grants for an ordinary team member
        const DEFAULT = Self::READ_CHANNEL.bits()
            | Self::VIEW_TEAM.bits()
            | Self::USE_SLASH_COMMANDS.bits()
            | Self::ADD_REACTION.bits()
            | Self::REMOVE_REACTION.bits();

        /// Grants held by a participant of a direct or group channel,
        /// which has no team and therefore no roles.
        const DM_PARTICIPANT = Self::READ_CHANNEL.bits()
            | Self::USE_SLASH_COMMANDS.bits()
            | Self::ADD_REACTION.bits()
            | Self::REMOVE_REACTION.bits();
    }
}

impl Permissions {
    /// Check whether this set grants the given permission.
    ///
    /// ADMINISTRATOR short-circuits every other flag.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }
}

// Serialize as a decimal string so the full u64 survives JSON round-trips
impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bits().to_string())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bits = s
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom("invalid permissions string"))?;
        Ok(Permissions::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_permission() {
        let perms = Permissions::READ_CHANNEL | Permissions::ADD_REACTION;
        assert!(perms.has(Permissions::READ_CHANNEL));
        assert!(!perms.has(Permissions::MANAGE_SLASH_COMMANDS));
    }

    #[test]
    fn test_administrator_bypasses_everything() {
        let perms = Permissions::ADMINISTRATOR;
        assert!(perms.has(Permissions::MANAGE_OTHERS_SLASH_COMMANDS));
        assert!(perms.has(Permissions::REMOVE_OTHERS_REACTIONS));
        assert!(perms.has(Permissions::VIEW_TEAM));
    }

    #[test]
    fn test_default_excludes_management() {
        let perms = Permissions::DEFAULT;
        assert!(perms.has(Permissions::USE_SLASH_COMMANDS));
        assert!(!perms.has(Permissions::MANAGE_SLASH_COMMANDS));
        assert!(!perms.has(Permissions::REMOVE_OTHERS_REACTIONS));
    }

    #[test]
    fn test_dm_participant_has_no_team_view() {
        let perms = Permissions::DM_PARTICIPANT;
        assert!(perms.has(Permissions::ADD_REACTION));
        assert!(!perms.has(Permissions::VIEW_TEAM));
    }

    #[test]
    fn test_serde_string_roundtrip() {
        let perms = Permissions::DEFAULT;
        let json = serde_json::to_string(&perms).unwrap();
        let back: Permissions = serde_json::from_str(&json).unwrap();
        assert_eq!(perms, back);
    }
}
