use async_trait::async_trait;
use lendstaff_core::{AppResult, UserId};
use lendstaff_domain::{GrantSet, OverrideVersion, PermissionOverride, Principal};

/// Port for the versioned store of delegated permission overrides.
///
/// Implementations hold at most one entry per target user and bump the
/// version token on every mutation, including removals that matched no
/// entry. Mutations must be serialized: two concurrent writers must
/// never overwrite each other's snapshot of the store.
///
/// Malformed persisted data never reaches callers. Read operations on
/// an unparseable store report an empty store and log the anomaly,
/// denying delegated capability rather than granting it.
#[async_trait]
pub trait OverrideStore: Send + Sync {
    /// Returns the delegated flags for a user, if any.
    async fn get(&self, user_id: UserId) -> AppResult<Option<GrantSet>>;

    /// Inserts an entry, replacing any prior entry for the same target
    /// user. Replacement is wholesale; flags are never merged.
    async fn put(&self, entry: PermissionOverride) -> AppResult<()>;

    /// Deletes the entry for a user. Returns whether an entry existed;
    /// the version is bumped either way.
    async fn remove(&self, user_id: UserId) -> AppResult<bool>;

    /// Lists every active override for administrative views.
    async fn list_all(&self) -> AppResult<Vec<PermissionOverride>>;

    /// Returns the current version token.
    async fn current_version(&self) -> AppResult<OverrideVersion>;

    /// Clears the store when the caller differs from the principal
    /// recorded at the last mutation, then binds to the caller.
    /// Returns whether entries were cleared.
    ///
    /// Defends against delegated rights leaking across unrelated login
    /// sessions sharing one persisted store.
    async fn reset_if_different_principal(&self, principal: &Principal) -> AppResult<bool>;
}
