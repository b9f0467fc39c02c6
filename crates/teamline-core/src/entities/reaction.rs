//! Emoji reaction entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Longest emoji name accepted on a reaction
pub const EMOJI_NAME_MAX_LENGTH: usize = 64;

/// An emoji placed by a user on a post
///
/// Identified by the (user, post, emoji) triple; a user can react to the
/// same post with many emoji but only once per emoji name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub user_id: Snowflake,
    pub post_id: Snowflake,
    pub emoji_name: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(user_id: Snowflake, post_id: Snowflake, emoji_name: String) -> Self {
        Self {
            user_id,
            post_id,
            emoji_name,
            created_at: Utc::now(),
        }
    }
}
