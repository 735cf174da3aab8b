//! Application services and ports for staff-management authorization.

#![forbid(unsafe_code)]

mod audit_ports;
mod authorization_gate;
mod override_store;
mod permission_engine;

pub use audit_ports::{AuditEvent, AuditRepository};
pub use authorization_gate::AuthorizationGate;
pub use override_store::OverrideStore;
pub use permission_engine::{EffectiveCapabilities, PermissionEngine};
