use std::str::FromStr;

use crate::role::{Department, StaffRole};

/// Static lookup table for role hierarchy and department grouping.
///
/// Hierarchy levels order roles for override-eligibility comparisons
/// only; the superadmin/admin base rules are role-name based and never
/// consult the level.
#[derive(Debug, Clone, Copy)]
pub struct RoleCatalog;

impl RoleCatalog {
    /// Returns the configured hierarchy level for a role.
    #[must_use]
    pub fn hierarchy_level(role: StaffRole) -> u8 {
        match role {
            StaffRole::Superadmin => 100,
            StaffRole::Admin => 90,
            StaffRole::BusinessSupervisor | StaffRole::Cto => 85,
            StaffRole::HrSupervisor | StaffRole::OpManager => 80,
            StaffRole::MktSupervisor => 75,
            StaffRole::FullstackDev | StaffRole::UxUi => 70,
            StaffRole::JuniorDs => 65,
            StaffRole::CsSupervisor
            | StaffRole::CdSupervisor
            | StaffRole::CoSupervisor
            | StaffRole::AcSupervisor => 60,
            StaffRole::CsOfficer
            | StaffRole::CdOfficer
            | StaffRole::CdCommittee
            | StaffRole::CoOfficer
            | StaffRole::AcOfficer
            | StaffRole::GraphicDesigner => 50,
        }
    }

    /// Returns the hierarchy level for a role storage value.
    ///
    /// Unknown roles resolve to level `0`, the weakest possible rank.
    #[must_use]
    pub fn hierarchy_level_named(name: &str) -> u8 {
        StaffRole::from_str(name).map_or(0, Self::hierarchy_level)
    }

    /// Returns the department grouping for a role.
    #[must_use]
    pub fn department(role: StaffRole) -> Department {
        match role {
            StaffRole::Superadmin | StaffRole::Admin | StaffRole::GraphicDesigner => {
                Department::General
            }
            StaffRole::BusinessSupervisor => Department::Business,
            StaffRole::Cto | StaffRole::FullstackDev | StaffRole::UxUi | StaffRole::JuniorDs => {
                Department::InformationTechnology
            }
            StaffRole::HrSupervisor => Department::HumanResources,
            StaffRole::OpManager => Department::Operations,
            StaffRole::MktSupervisor => Department::Marketing,
            StaffRole::CsSupervisor | StaffRole::CsOfficer => Department::CustomerService,
            StaffRole::CdSupervisor | StaffRole::CdOfficer | StaffRole::CdCommittee => {
                Department::Credit
            }
            StaffRole::CoSupervisor | StaffRole::CoOfficer => Department::CreditOperations,
            StaffRole::AcSupervisor | StaffRole::AcOfficer => Department::Accounting,
        }
    }

    /// Returns the department for a role storage value.
    ///
    /// Unknown roles resolve to [`Department::General`].
    #[must_use]
    pub fn department_named(name: &str) -> Department {
        StaffRole::from_str(name).map_or(Department::General, Self::department)
    }

    /// Returns every role that can ever be created, edited or deleted.
    ///
    /// The universe excludes nothing; policy exclusions are applied by
    /// the authorization gate.
    #[must_use]
    pub fn assignable_role_universe() -> &'static [StaffRole] {
        StaffRole::all()
    }

    /// Returns the level threshold granting full team visibility.
    #[must_use]
    pub fn admin_level() -> u8 {
        Self::hierarchy_level(StaffRole::Admin)
    }
}
