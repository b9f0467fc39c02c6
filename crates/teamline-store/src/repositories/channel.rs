//! In-memory channel repository

use async_trait::async_trait;
use dashmap::DashMap;
use teamline_core::{Channel, ChannelRepository, RepoResult, Snowflake};

#[derive(Debug, Default)]
pub struct InMemoryChannelRepository {
    channels: DashMap<Snowflake, Channel>,
    recipients: DashMap<Snowflake, Vec<Snowflake>>,
}

impl InMemoryChannelRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the participants of a direct or group channel
    pub fn set_recipients(&self, channel_id: Snowflake, users: Vec<Snowflake>) {
        self.recipients.insert(channel_id, users);
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>> {
        Ok(self.channels.get(&id).map(|c| c.clone()))
    }

    async fn create(&self, channel: Channel) -> RepoResult<Channel> {
        self.channels.insert(channel.id, channel.clone());
        Ok(channel)
    }

    async fn get_recipients(&self, channel_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        Ok(self
            .recipients
            .get(&channel_id)
            .map(|r| r.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recipients_for_direct_channel() {
        let repo = InMemoryChannelRepository::new();
        let channel = Channel::new_direct(Snowflake::new(5));
        repo.create(channel).await.unwrap();
        repo.set_recipients(Snowflake::new(5), vec![Snowflake::new(1), Snowflake::new(2)]);

        let recipients = repo.get_recipients(Snowflake::new(5)).await.unwrap();
        assert_eq!(recipients.len(), 2);

        // Unknown channel yields no recipients rather than an error
        assert!(repo
            .get_recipients(Snowflake::new(99))
            .await
            .unwrap()
            .is_empty());
    }
}
