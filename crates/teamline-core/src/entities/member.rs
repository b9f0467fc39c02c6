//! Team membership entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Links a user to a team and carries the roles granted there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: Snowflake,
    pub user_id: Snowflake,
    /// Extra roles beyond the team's default role
    pub role_ids: Vec<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn new(team_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            team_id,
            user_id,
            role_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_roles(mut self, role_ids: Vec<Snowflake>) -> Self {
        self.role_ids = role_ids;
        self
    }
}
