use serde::{Deserialize, Serialize};

/// Stable audit actions emitted by the authorization gate and stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a permission override is granted or replaced.
    PermissionGranted,
    /// Emitted when a permission override is revoked.
    PermissionRevoked,
    /// Emitted when the override store is cleared on a principal change.
    OverrideStoreCleared,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PermissionGranted => "permission.granted",
            Self::PermissionRevoked => "permission.revoked",
            Self::OverrideStoreCleared => "permission.store_cleared",
        }
    }
}
