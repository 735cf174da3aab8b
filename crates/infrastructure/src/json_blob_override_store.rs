use std::sync::Arc;

use async_trait::async_trait;
use lendstaff_application::OverrideStore;
use lendstaff_core::{AppError, AppResult, UserId};
use lendstaff_domain::{GrantSet, OverrideVersion, PermissionOverride, Principal};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::warn;

/// Port for the physical persistence of the override blob.
///
/// The host application owns the transport: a browser key-value store,
/// a file, a database row. The blob is read and written wholesale.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Loads the persisted blob, if one exists.
    async fn load(&self) -> AppResult<Option<String>>;

    /// Persists the blob, replacing any prior value.
    async fn store(&self, blob: &str) -> AppResult<()>;
}

/// In-memory blob storage for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryBlobStorage {
    blob: RwLock<Option<String>>,
}

impl InMemoryBlobStorage {
    /// Creates empty blob storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn load(&self) -> AppResult<Option<String>> {
        Ok(self.blob.read().await.clone())
    }

    async fn store(&self, blob: &str) -> AppResult<()> {
        *self.blob.write().await = Some(blob.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OverrideDocument {
    version: OverrideVersion,
    bound_user: Option<UserId>,
    entries: Vec<PermissionOverride>,
}

/// Override store persisting the whole collection as one JSON document.
///
/// An unparseable document is treated as an empty store and logged;
/// corruption denies delegated capability instead of granting it. A
/// mutation lock serializes the read-modify-write cycle against the
/// underlying storage.
pub struct JsonBlobOverrideStore {
    storage: Arc<dyn BlobStorage>,
    mutation_lock: Mutex<()>,
}

impl JsonBlobOverrideStore {
    /// Creates a store over the given blob storage.
    #[must_use]
    pub fn new(storage: Arc<dyn BlobStorage>) -> Self {
        Self {
            storage,
            mutation_lock: Mutex::new(()),
        }
    }

    async fn read_document(&self) -> AppResult<OverrideDocument> {
        let Some(blob) = self.storage.load().await? else {
            return Ok(OverrideDocument::default());
        };

        match serde_json::from_str(&blob) {
            Ok(document) => Ok(document),
            Err(error) => {
                warn!(%error, "discarding malformed permission override data");
                Ok(OverrideDocument::default())
            }
        }
    }

    async fn write_document(&self, document: &OverrideDocument) -> AppResult<()> {
        let blob = serde_json::to_string(document)
            .map_err(|error| AppError::Internal(format!("encoding override data: {error}")))?;
        self.storage.store(&blob).await
    }
}

#[async_trait]
impl OverrideStore for JsonBlobOverrideStore {
    async fn get(&self, user_id: UserId) -> AppResult<Option<GrantSet>> {
        Ok(self
            .read_document()
            .await?
            .entries
            .iter()
            .find(|entry| entry.target_user_id == user_id)
            .map(|entry| entry.grants))
    }

    async fn put(&self, entry: PermissionOverride) -> AppResult<()> {
        let _guard = self.mutation_lock.lock().await;
        let mut document = self.read_document().await?;
        document
            .entries
            .retain(|existing| existing.target_user_id != entry.target_user_id);
        document.bound_user = Some(entry.granted_by);
        document.entries.push(entry);
        document.version = document.version.next();
        self.write_document(&document).await
    }

    async fn remove(&self, user_id: UserId) -> AppResult<bool> {
        let _guard = self.mutation_lock.lock().await;
        let mut document = self.read_document().await?;
        let before = document.entries.len();
        document.entries.retain(|entry| entry.target_user_id != user_id);
        let existed = document.entries.len() != before;
        document.version = document.version.next();
        self.write_document(&document).await?;
        Ok(existed)
    }

    async fn list_all(&self) -> AppResult<Vec<PermissionOverride>> {
        Ok(self.read_document().await?.entries)
    }

    async fn current_version(&self) -> AppResult<OverrideVersion> {
        Ok(self.read_document().await?.version)
    }

    async fn reset_if_different_principal(&self, principal: &Principal) -> AppResult<bool> {
        let _guard = self.mutation_lock.lock().await;
        let mut document = self.read_document().await?;
        let cleared = document
            .bound_user
            .is_some_and(|bound| bound != principal.user_id)
            && !document.entries.is_empty();
        if cleared {
            tracing::info!(
                user_id = %principal.user_id,
                "clearing persisted overrides on principal change"
            );
            document.entries.clear();
            document.version = document.version.next();
        }
        document.bound_user = Some(principal.user_id);
        self.write_document(&document).await?;
        Ok(cleared)
    }
}
