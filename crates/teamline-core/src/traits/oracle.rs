//! Permission oracle seam

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::value_objects::{Permissions, Session, Snowflake};

/// Answers permission questions for a session against a scope.
///
/// Every method returns `Ok(false)` rather than an error when the scope
/// does not exist, so callers decide how much to reveal about missing
/// resources.
#[async_trait]
pub trait PermissionOracle: Send + Sync {
    async fn has_permission_to_team(
        &self,
        session: &Session,
        team_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool>;

    async fn has_permission_to_channel(
        &self,
        session: &Session,
        channel_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool>;

    /// Resolve the post's channel, then check against that channel
    async fn has_permission_to_channel_by_post(
        &self,
        session: &Session,
        post_id: Snowflake,
        permission: Permissions,
    ) -> RepoResult<bool>;

    /// Permissions granted outside any team or channel scope
    async fn has_global_permission(
        &self,
        session: &Session,
        permission: Permissions,
    ) -> RepoResult<bool>;
}
