//! Audit trail seam

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::repositories::RepoResult;
use crate::value_objects::Snowflake;

/// Outcome recorded for an audited operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    /// Operation started but has not completed
    Attempt,
    /// Operation completed successfully
    Success,
    /// Operation failed
    Fail,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attempt => "attempt",
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }
}

/// One audited operation with its actor and metadata.
///
/// Records start as `Fail` and are flipped to `Success` once the
/// operation completes, so an early return still leaves a failure row.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub event: &'static str,
    pub actor_id: Snowflake,
    pub status: AuditStatus,
    pub meta: Map<String, Value>,
}

impl AuditRecord {
    pub fn new(event: &'static str, actor_id: Snowflake) -> Self {
        Self {
            event,
            actor_id,
            status: AuditStatus::Fail,
            meta: Map::new(),
        }
    }

    pub fn add_meta(&mut self, key: &str, value: impl Into<Value>) {
        self.meta.insert(key.to_string(), value.into());
    }

    pub fn success(&mut self) {
        self.status = AuditStatus::Success;
    }
}

/// Destination for audit records
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn write(&self, record: &AuditRecord) -> RepoResult<()>;
}
