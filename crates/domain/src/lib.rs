//! Domain entities and invariants for staff-management authorization.

#![forbid(unsafe_code)]

mod audit;
mod catalog;
mod grants;
mod role;
mod staff;

pub use audit::AuditAction;
pub use catalog::RoleCatalog;
pub use grants::{GrantSet, OverrideVersion, PermissionOverride};
pub use role::{Department, StaffRole};
pub use staff::{Principal, StaffAction, StaffRecord};
