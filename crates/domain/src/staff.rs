use lendstaff_core::{StaffId, UserId};

use crate::role::StaffRole;

/// Authenticated actor performing a staff-management action.
///
/// Supplied by the credential collaborator; trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// Account id of the actor.
    pub user_id: UserId,
    /// Static role of the actor.
    pub role: StaffRole,
}

impl Principal {
    /// Returns whether the target record belongs to this principal.
    #[must_use]
    pub fn is_self(&self, target: &StaffRecord) -> bool {
        self.user_id == target.owner_user_id
    }
}

/// Staff record being acted upon, supplied by the persistence collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffRecord {
    /// Stable staff record id.
    pub staff_id: StaffId,
    /// Account id owning the record.
    pub owner_user_id: UserId,
    /// Static role of the staff member.
    pub role: StaffRole,
}

/// Staff-management action used for role enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffAction {
    /// Creating a new staff record.
    Create,
    /// Editing an existing staff record.
    Edit,
    /// Deleting an existing staff record.
    Delete,
}

impl StaffAction {
    /// Returns a stable label for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}
