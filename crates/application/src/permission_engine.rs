use std::sync::Arc;

use lendstaff_core::AppResult;
use lendstaff_domain::{GrantSet, Principal, RoleCatalog, StaffRecord, StaffRole};

use crate::OverrideStore;

/// Effective capability set computed for one principal.
///
/// Base rules come from the principal's static role; the override layer
/// applies to delegated principals only. Evaluation is pure: the object
/// captures one override snapshot and holds no store reference.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveCapabilities {
    principal: Principal,
    grants: Option<GrantSet>,
}

impl EffectiveCapabilities {
    /// Combines a principal with the override snapshot read for it.
    #[must_use]
    pub fn new(principal: Principal, grants: Option<GrantSet>) -> Self {
        Self { principal, grants }
    }

    /// Returns the principal the capabilities were computed for.
    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    fn grants(&self) -> GrantSet {
        self.grants.unwrap_or_default()
    }

    /// Returns whether the staff-management surface is visible.
    #[must_use]
    pub fn can_view_staff_management(&self) -> bool {
        match self.principal.role {
            StaffRole::Superadmin | StaffRole::Admin => true,
            _ => self.grants().can_access_staff_management,
        }
    }

    /// Returns whether new staff records may be created.
    #[must_use]
    pub fn can_create_staff(&self) -> bool {
        match self.principal.role {
            StaffRole::Superadmin | StaffRole::Admin => true,
            _ => self.grants().can_create,
        }
    }

    /// Returns whether the principal may manage delegated permissions.
    ///
    /// For non-superadmin principals the flag only counts together with
    /// staff-management access; the grant path enforces the same
    /// coupling, this re-checks it at read time.
    #[must_use]
    pub fn can_manage_permissions(&self) -> bool {
        if self.principal.role == StaffRole::Superadmin {
            return true;
        }
        let grants = self.grants();
        grants.can_manage_permissions && grants.can_access_staff_management
    }

    /// Returns whether team-wide performance data is visible.
    #[must_use]
    pub fn can_view_all_team(&self) -> bool {
        self.grants().can_view_all
            || RoleCatalog::hierarchy_level(self.principal.role) >= RoleCatalog::admin_level()
    }

    /// Returns whether the target staff record is visible.
    #[must_use]
    pub fn can_view_staff(&self, target: &StaffRecord) -> bool {
        match self.principal.role {
            StaffRole::Superadmin => true,
            StaffRole::Admin => target.role != StaffRole::Superadmin,
            _ => {
                self.grants().can_view_all
                    && !self.principal.is_self(target)
                    && !target.role.is_protected()
            }
        }
    }

    /// Returns whether the target staff record may be edited.
    #[must_use]
    pub fn can_edit_staff(&self, target: &StaffRecord) -> bool {
        self.can_mutate_staff(target, |grants| grants.can_edit)
    }

    /// Returns whether the target staff record may be deleted.
    #[must_use]
    pub fn can_delete_staff(&self, target: &StaffRecord) -> bool {
        self.can_mutate_staff(target, |grants| grants.can_delete)
    }

    fn can_mutate_staff(&self, target: &StaffRecord, flag: fn(&GrantSet) -> bool) -> bool {
        // Self-exclusion: nobody edits or deletes their own record.
        if self.principal.is_self(target) {
            return false;
        }
        // Superadmin immunity: only superadmin reaches superadmin targets.
        if target.role == StaffRole::Superadmin && self.principal.role != StaffRole::Superadmin {
            return false;
        }

        match self.principal.role {
            StaffRole::Superadmin | StaffRole::Admin => true,
            _ => {
                let grants = self.grants();
                flag(&grants) && grants.can_view_all
            }
        }
    }
}

/// Computes effective capabilities by combining base role rules with the
/// override store. Holds no state between calls; every evaluation reads
/// the store fresh.
#[derive(Clone)]
pub struct PermissionEngine {
    store: Arc<dyn OverrideStore>,
}

impl PermissionEngine {
    /// Creates an engine reading overrides from the given store.
    #[must_use]
    pub fn new(store: Arc<dyn OverrideStore>) -> Self {
        Self { store }
    }

    /// Resolves the effective capability set for a principal.
    pub async fn effective_capabilities(
        &self,
        principal: &Principal,
    ) -> AppResult<EffectiveCapabilities> {
        let grants = self.store.get(principal.user_id).await?;
        Ok(EffectiveCapabilities::new(*principal, grants))
    }
}
