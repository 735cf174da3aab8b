//! Console audit sink for development. Logs events to tracing output.

use async_trait::async_trait;
use lendstaff_application::{AuditEvent, AuditRepository};
use lendstaff_core::AppResult;
use tracing::info;

/// Development audit sink that logs events to the console.
#[derive(Clone)]
pub struct TracingAuditLog;

impl TracingAuditLog {
    /// Creates a new console audit sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditRepository for TracingAuditLog {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        info!(
            actor = %event.actor,
            action = event.action.as_str(),
            target_user_id = %event.target_user_id,
            detail = event.detail.as_deref().unwrap_or(""),
            "audit event"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lendstaff_application::{AuditEvent, AuditRepository};
    use lendstaff_core::UserId;
    use lendstaff_domain::AuditAction;

    use super::TracingAuditLog;

    #[tokio::test]
    async fn append_event_never_fails() {
        let log = TracingAuditLog::new();
        let appended = log
            .append_event(AuditEvent {
                actor: UserId::new(1),
                action: AuditAction::PermissionGranted,
                target_user_id: UserId::new(42),
                detail: Some("granted override to 'sok.vanna' (cs-officer)".to_owned()),
            })
            .await;
        assert!(appended.is_ok());
    }
}
