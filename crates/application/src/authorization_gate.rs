use std::sync::Arc;

use chrono::Utc;
use lendstaff_core::{AppError, AppResult, NonEmptyString, UserId};
use lendstaff_domain::{
    AuditAction, GrantSet, OverrideVersion, PermissionOverride, Principal, RoleCatalog,
    StaffAction, StaffRecord, StaffRole,
};

use crate::{AuditEvent, AuditRepository, EffectiveCapabilities, OverrideStore, PermissionEngine};


/// Public facade mediating every staff-management authorization question.
///
/// Capability checks and role enumeration are read-only; `grant` and
/// `revoke` are the only mutating entry points. Policy denial is an
/// expected outcome and surfaces as `false`, never as an error.
#[derive(Clone)]
pub struct AuthorizationGate {
    engine: PermissionEngine,
    store: Arc<dyn OverrideStore>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl AuthorizationGate {
    /// Creates a gate over an override store and an audit sink.
    #[must_use]
    pub fn new(store: Arc<dyn OverrideStore>, audit_repository: Arc<dyn AuditRepository>) -> Self {
        Self {
            engine: PermissionEngine::new(store.clone()),
            store,
            audit_repository,
        }
    }

    /// Resolves the full effective capability set for a principal.
    pub async fn effective_capabilities(
        &self,
        principal: &Principal,
    ) -> AppResult<EffectiveCapabilities> {
        self.engine.effective_capabilities(principal).await
    }

    /// Returns whether the staff-management surface is visible.
    pub async fn can_view_staff_management(&self, principal: &Principal) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_view_staff_management())
    }

    /// Returns whether the principal may create staff records.
    pub async fn can_create_staff(&self, principal: &Principal) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_create_staff())
    }

    /// Returns whether the principal may manage delegated permissions.
    pub async fn can_manage_permissions(&self, principal: &Principal) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_manage_permissions())
    }

    /// Returns whether team-wide performance data is visible.
    pub async fn can_view_all_team(&self, principal: &Principal) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_view_all_team())
    }

    /// Returns whether the target staff record is visible.
    pub async fn can_view_staff(
        &self,
        principal: &Principal,
        target: &StaffRecord,
    ) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_view_staff(target))
    }

    /// Returns whether the target staff record may be edited.
    pub async fn can_edit_staff(
        &self,
        principal: &Principal,
        target: &StaffRecord,
    ) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_edit_staff(target))
    }

    /// Returns whether the target staff record may be deleted.
    pub async fn can_delete_staff(
        &self,
        principal: &Principal,
        target: &StaffRecord,
    ) -> AppResult<bool> {
        Ok(self
            .engine
            .effective_capabilities(principal)
            .await?
            .can_delete_staff(target))
    }

    /// Issues or replaces a permission override for a target user.
    ///
    /// Returns `Ok(false)` without touching the store when any
    /// precondition fails: the granter lacks management capability, the
    /// management flag is requested by a non-superadmin, without
    /// staff-management access or for a non-admin target role, an admin
    /// targets another admin, the grant targets the granter itself, or
    /// the target role is superadmin.
    pub async fn grant(
        &self,
        granter: &Principal,
        target_user_id: UserId,
        target_username: &str,
        target_role: StaffRole,
        requested: GrantSet,
    ) -> AppResult<bool> {
        let username = NonEmptyString::new(target_username)?;

        if !self.can_manage(granter).await? {
            return Ok(false);
        }
        if requested.can_manage_permissions && granter.role != StaffRole::Superadmin {
            return Ok(false);
        }
        if requested.can_manage_permissions && !requested.can_access_staff_management {
            return Ok(false);
        }
        if requested.can_manage_permissions && target_role != StaffRole::Admin {
            return Ok(false);
        }
        if granter.role == StaffRole::Admin
            && target_role == StaffRole::Admin
            && target_user_id != granter.user_id
        {
            return Ok(false);
        }
        if target_user_id == granter.user_id {
            return Ok(false);
        }
        if target_role == StaffRole::Superadmin {
            return Ok(false);
        }

        self.store
            .put(PermissionOverride {
                target_user_id,
                username: username.as_str().to_owned(),
                role: target_role.as_str().to_owned(),
                grants: requested,
                granted_by: granter.user_id,
                granted_at: Utc::now(),
            })
            .await?;

        self.audit_repository
            .append_event(AuditEvent {
                actor: granter.user_id,
                action: AuditAction::PermissionGranted,
                target_user_id,
                detail: Some(format!(
                    "granted override to '{}' ({})",
                    username.as_str(),
                    target_role.as_str()
                )),
            })
            .await?;

        Ok(true)
    }

    /// Revokes the permission override of a target user.
    ///
    /// Returns whether an override existed. Denied callers and
    /// self-revocation also report `false`; the store version is bumped
    /// only for authorized calls.
    pub async fn revoke(&self, granter: &Principal, target_user_id: UserId) -> AppResult<bool> {
        if !self.can_manage(granter).await? {
            return Ok(false);
        }
        if target_user_id == granter.user_id {
            return Ok(false);
        }

        let existed = self.store.remove(target_user_id).await?;
        if existed {
            self.audit_repository
                .append_event(AuditEvent {
                    actor: granter.user_id,
                    action: AuditAction::PermissionRevoked,
                    target_user_id,
                    detail: None,
                })
                .await?;
        }

        Ok(existed)
    }

    /// Returns the roles the principal may apply the given action to.
    ///
    /// Superadmin and admin principals get the catalog minus superadmin
    /// and their own role. Delegated principals need the override flag
    /// matching the action and are further restricted to non-protected
    /// roles strictly below their own level.
    pub async fn assignable_roles(
        &self,
        principal: &Principal,
        action: StaffAction,
    ) -> AppResult<Vec<StaffRole>> {
        let universe = RoleCatalog::assignable_role_universe();

        match principal.role {
            StaffRole::Superadmin | StaffRole::Admin => Ok(universe
                .iter()
                .copied()
                .filter(|role| *role != StaffRole::Superadmin && *role != principal.role)
                .collect()),
            _ => {
                let grants = self.store.get(principal.user_id).await?.unwrap_or_default();
                if !grants.allows(action) {
                    return Ok(Vec::new());
                }

                let own_level = RoleCatalog::hierarchy_level(principal.role);
                Ok(universe
                    .iter()
                    .copied()
                    .filter(|role| {
                        *role != principal.role
                            && !role.is_protected()
                            && RoleCatalog::hierarchy_level(*role) < own_level
                    })
                    .collect())
            }
        }
    }

    /// Lists active overrides for administrative views.
    pub async fn list_overrides(&self, viewer: &Principal) -> AppResult<Vec<PermissionOverride>> {
        if !self.can_manage(viewer).await? {
            return Err(AppError::Forbidden(format!(
                "user '{}' may not list permission overrides",
                viewer.user_id
            )));
        }

        self.store.list_all().await
    }

    /// Returns the store version token for UI polling.
    pub async fn current_version(&self) -> AppResult<OverrideVersion> {
        self.store.current_version().await
    }

    /// Clears stale overrides when the session principal changed.
    /// Returns whether entries were cleared.
    pub async fn reset_if_different_principal(&self, principal: &Principal) -> AppResult<bool> {
        let cleared = self.store.reset_if_different_principal(principal).await?;
        if cleared {
            self.audit_repository
                .append_event(AuditEvent {
                    actor: principal.user_id,
                    action: AuditAction::OverrideStoreCleared,
                    target_user_id: principal.user_id,
                    detail: Some("cleared delegated overrides on principal change".to_owned()),
                })
                .await?;
        }

        Ok(cleared)
    }

    async fn can_manage(&self, granter: &Principal) -> AppResult<bool> {
        match granter.role {
            StaffRole::Superadmin => Ok(true),
            StaffRole::Admin => Ok(self
                .engine
                .effective_capabilities(granter)
                .await?
                .can_manage_permissions()),
            _ => Ok(false),
        }
    }
}
