use async_trait::async_trait;
use chrono::Utc;
use lendstaff_application::{AuditEvent, AuditRepository};
use lendstaff_core::AppResult;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Audit log entry projection for administrative views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    /// Stable event identifier.
    pub event_id: String,
    /// Actor user id.
    pub actor: String,
    /// Stable action identifier.
    pub action: String,
    /// Affected user id.
    pub target_user_id: String,
    /// Optional event detail.
    pub detail: Option<String>,
    /// Event timestamp in RFC3339.
    pub created_at: String,
}

/// In-memory append-only audit log.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: RwLock<Vec<AuditLogEntry>>,
}

impl InMemoryAuditLog {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded entries, oldest first.
    pub async fn entries(&self) -> Vec<AuditLogEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditLog {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.entries.write().await.push(AuditLogEntry {
            event_id: Uuid::new_v4().to_string(),
            actor: event.actor.to_string(),
            action: event.action.as_str().to_owned(),
            target_user_id: event.target_user_id.to_string(),
            detail: event.detail,
            created_at: Utc::now().to_rfc3339(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lendstaff_application::{AuditEvent, AuditRepository};
    use lendstaff_core::UserId;
    use lendstaff_domain::AuditAction;

    use super::InMemoryAuditLog;

    #[tokio::test]
    async fn appended_events_are_listed_in_order() {
        let log = InMemoryAuditLog::new();

        for action in [AuditAction::PermissionGranted, AuditAction::PermissionRevoked] {
            let appended = log
                .append_event(AuditEvent {
                    actor: UserId::new(1),
                    action,
                    target_user_id: UserId::new(42),
                    detail: None,
                })
                .await;
            assert!(appended.is_ok());
        }

        let entries = log.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "permission.granted");
        assert_eq!(entries[1].action, "permission.revoked");
    }
}
