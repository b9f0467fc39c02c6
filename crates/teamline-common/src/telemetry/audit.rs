//! Audit sink backed by the tracing subscriber

use async_trait::async_trait;
use teamline_core::{AuditRecord, AuditSink, RepoResult};

/// Writes audit records as structured events on a dedicated target,
/// so the subscriber can route them separately from application logs.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn write(&self, record: &AuditRecord) -> RepoResult<()> {
        tracing::info!(
            target: "audit",
            event = record.event,
            actor_id = %record.actor_id,
            status = record.status.as_str(),
            meta = %serde_json::Value::Object(record.meta.clone()),
            "audit"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamline_core::Snowflake;

    #[tokio::test]
    async fn test_write_never_fails() {
        let sink = TracingAuditSink::new();
        let mut record = AuditRecord::new("create_command", Snowflake::new(1));
        record.add_meta("team_id", "7");
        record.success();

        assert!(sink.write(&record).await.is_ok());
    }
}
