//! In-memory reaction repository

use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use teamline_core::{Reaction, ReactionRepository, RepoResult, Snowflake};

/// Reactions keyed by post id; within a post the (user, emoji) pair
/// is unique.
#[derive(Debug, Default)]
pub struct InMemoryReactionRepository {
    by_post: DashMap<Snowflake, Vec<Reaction>>,
}

impl InMemoryReactionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn save(&self, reaction: Reaction) -> RepoResult<Reaction> {
        let mut entry = self.by_post.entry(reaction.post_id).or_default();

        if let Some(existing) = entry
            .iter()
            .find(|r| r.user_id == reaction.user_id && r.emoji_name == reaction.emoji_name)
        {
            // Repeated save of the same triple is a no-op
            return Ok(existing.clone());
        }

        entry.push(reaction.clone());
        Ok(reaction)
    }

    async fn delete(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        emoji_name: &str,
    ) -> RepoResult<()> {
        if let Some(mut entry) = self.by_post.get_mut(&post_id) {
            entry.retain(|r| !(r.user_id == user_id && r.emoji_name == emoji_name));
        }
        Ok(())
    }

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .by_post
            .get(&post_id)
            .map(|r| r.clone())
            .unwrap_or_default())
    }

    async fn find_by_post_ids(
        &self,
        post_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, Vec<Reaction>>> {
        let mut result = HashMap::with_capacity(post_ids.len());
        for post_id in post_ids {
            let reactions = self
                .by_post
                .get(post_id)
                .map(|r| r.clone())
                .unwrap_or_default();
            result.insert(*post_id, reactions);
        }
        Ok(result)
    }
}
