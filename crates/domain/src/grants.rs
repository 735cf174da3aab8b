use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use lendstaff_core::UserId;
use serde::{Deserialize, Serialize};

use crate::staff::StaffAction;

/// Delegable permission flags attached to one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GrantSet {
    /// Grants access to the staff-management surface.
    pub can_access_staff_management: bool,
    /// Grants staff creation.
    pub can_create: bool,
    /// Grants staff editing (requires `can_view_all` to take effect).
    pub can_edit: bool,
    /// Grants staff deletion (requires `can_view_all` to take effect).
    pub can_delete: bool,
    /// Grants visibility over non-protected staff.
    pub can_view_all: bool,
    /// Grants further permission management; superadmin-delegated only.
    pub can_manage_permissions: bool,
}

impl GrantSet {
    /// Returns whether the flag matching a staff action is set.
    #[must_use]
    pub fn allows(&self, action: StaffAction) -> bool {
        match action {
            StaffAction::Create => self.can_create,
            StaffAction::Edit => self.can_edit,
            StaffAction::Delete => self.can_delete,
        }
    }
}

/// One delegated permission entry; at most one active per target user.
///
/// Writes replace the whole record for the target user. There is no
/// partial-update path: callers read the full set, change a flag and
/// write the full set back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOverride {
    /// User receiving the delegated permissions.
    pub target_user_id: UserId,
    /// Username snapshot captured at grant time.
    pub username: String,
    /// Role storage value snapshot captured at grant time.
    pub role: String,
    /// Delegated flags.
    pub grants: GrantSet,
    /// User that issued the grant.
    pub granted_by: UserId,
    /// Grant timestamp.
    pub granted_at: DateTime<Utc>,
}

/// Opaque override-store version token.
///
/// Tokens are comparable for inequality only; consumers poll the store
/// and reload when the token changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideVersion(u64);

impl OverrideVersion {
    /// Returns the version of an empty, never-mutated store.
    #[must_use]
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the successor token; used by store implementations on
    /// every mutation.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl Display for OverrideVersion {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{GrantSet, OverrideVersion, StaffAction};

    #[test]
    fn default_grant_set_denies_everything() {
        let grants = GrantSet::default();
        assert!(!grants.can_access_staff_management);
        assert!(!grants.can_create);
        assert!(!grants.can_edit);
        assert!(!grants.can_delete);
        assert!(!grants.can_view_all);
        assert!(!grants.can_manage_permissions);
    }

    #[test]
    fn allows_matches_action_flags() {
        let grants = GrantSet {
            can_edit: true,
            ..GrantSet::default()
        };
        assert!(grants.allows(StaffAction::Edit));
        assert!(!grants.allows(StaffAction::Create));
        assert!(!grants.allows(StaffAction::Delete));
    }

    #[test]
    fn version_successor_differs() {
        let version = OverrideVersion::initial();
        assert_ne!(version, version.next());
    }
}
