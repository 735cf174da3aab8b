use async_trait::async_trait;
use lendstaff_application::OverrideStore;
use lendstaff_core::{AppResult, UserId};
use lendstaff_domain::{GrantSet, OverrideVersion, PermissionOverride, Principal};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<PermissionOverride>,
    version: OverrideVersion,
    bound_user: Option<UserId>,
}

/// In-memory override store implementation.
///
/// A single write lock serializes every mutation, so concurrent grant
/// and revoke calls cannot lose updates to a stale snapshot.
#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    state: RwLock<StoreState>,
}

impl InMemoryOverrideStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OverrideStore for InMemoryOverrideStore {
    async fn get(&self, user_id: UserId) -> AppResult<Option<GrantSet>> {
        Ok(self
            .state
            .read()
            .await
            .entries
            .iter()
            .find(|entry| entry.target_user_id == user_id)
            .map(|entry| entry.grants))
    }

    async fn put(&self, entry: PermissionOverride) -> AppResult<()> {
        let mut state = self.state.write().await;
        state
            .entries
            .retain(|existing| existing.target_user_id != entry.target_user_id);
        state.bound_user = Some(entry.granted_by);
        state.entries.push(entry);
        state.version = state.version.next();
        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let before = state.entries.len();
        state.entries.retain(|entry| entry.target_user_id != user_id);
        let existed = state.entries.len() != before;
        // Bumped on the miss too, so pollers never trust a stale token.
        state.version = state.version.next();
        Ok(existed)
    }

    async fn list_all(&self) -> AppResult<Vec<PermissionOverride>> {
        Ok(self.state.read().await.entries.clone())
    }

    async fn current_version(&self) -> AppResult<OverrideVersion> {
        Ok(self.state.read().await.version)
    }

    async fn reset_if_different_principal(&self, principal: &Principal) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let cleared = state
            .bound_user
            .is_some_and(|bound| bound != principal.user_id)
            && !state.entries.is_empty();
        if cleared {
            tracing::info!(
                user_id = %principal.user_id,
                "clearing override store on principal change"
            );
            state.entries.clear();
            state.version = state.version.next();
        }
        state.bound_user = Some(principal.user_id);
        Ok(cleared)
    }
}
