//! Authenticated session attached to every request

use serde::{Deserialize, Serialize};

use super::Snowflake;

/// Role id reported for ordinary users when ranking autocomplete results
pub const SYSTEM_USER_ROLE_ID: &str = "system_user";
/// Role id reported for system administrators
pub const SYSTEM_ADMIN_ROLE_ID: &str = "system_admin";

/// Identity and scope of the caller, decoded from the auth token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Snowflake,
    /// Teams the user belongs to at token-decode time
    pub team_ids: Vec<Snowflake>,
    pub is_admin: bool,
    pub locale: String,
}

impl Session {
    pub fn new(user_id: Snowflake, team_ids: Vec<Snowflake>, is_admin: bool) -> Self {
        Self {
            user_id,
            team_ids,
            is_admin,
            locale: "en".to_string(),
        }
    }

    /// Whether the session user is a member of the given team
    pub fn is_member_of(&self, team_id: Snowflake) -> bool {
        self.team_ids.contains(&team_id)
    }

    /// The system role id used to scope built-in command suggestions
    pub fn system_role_id(&self) -> &'static str {
        if self.is_admin {
            SYSTEM_ADMIN_ROLE_ID
        } else {
            SYSTEM_USER_ROLE_ID
        }
    }
}
