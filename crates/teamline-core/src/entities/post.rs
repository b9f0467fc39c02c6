//! Post entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A message posted to a channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    pub message: String,
    /// Root of the thread this post replies to, if any
    pub root_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(id: Snowflake, channel_id: Snowflake, user_id: Snowflake, message: String) -> Self {
        Self {
            id,
            channel_id,
            user_id,
            message,
            root_id: None,
            created_at: Utc::now(),
        }
    }
}
