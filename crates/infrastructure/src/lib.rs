//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_audit_log;
mod in_memory_override_store;
mod json_blob_override_store;
mod tracing_audit_log;

pub use in_memory_audit_log::{AuditLogEntry, InMemoryAuditLog};
pub use in_memory_override_store::InMemoryOverrideStore;
pub use json_blob_override_store::{BlobStorage, InMemoryBlobStorage, JsonBlobOverrideStore};
pub use tracing_audit_log::TracingAuditLog;
