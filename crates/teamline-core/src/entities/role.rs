//! Role entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Permissions, Snowflake};

/// A named bundle of permissions scoped to a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub team_id: Snowflake,
    pub name: String,
    pub permissions: Permissions,
    /// The role every member holds implicitly
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Role {
    pub fn new(id: Snowflake, team_id: Snowflake, name: String, permissions: Permissions) -> Self {
        Self {
            id,
            team_id,
            name,
            permissions,
            is_default: false,
            created_at: Utc::now(),
        }
    }

    pub fn new_default(id: Snowflake, team_id: Snowflake) -> Self {
        Self {
            id,
            team_id,
            name: "member".to_string(),
            permissions: Permissions::DEFAULT,
            is_default: true,
            created_at: Utc::now(),
        }
    }
}
