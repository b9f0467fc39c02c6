//! In-memory post repository

use async_trait::async_trait;
use dashmap::DashMap;
use teamline_core::{Post, PostRepository, RepoResult, Snowflake};

#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: DashMap<Snowflake, Post>,
}

impl InMemoryPostRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|p| p.clone()))
    }

    async fn create(&self, post: Post) -> RepoResult<Post> {
        self.posts.insert(post.id, post.clone());
        Ok(post)
    }
}
