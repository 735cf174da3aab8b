use std::str::FromStr;

use lendstaff_core::AppError;

/// Department grouping derived from role naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    /// Roles without a department code.
    General,
    /// Business leadership.
    Business,
    /// Engineering and design roles.
    InformationTechnology,
    /// Human resources.
    HumanResources,
    /// Branch operations.
    Operations,
    /// Marketing and brand.
    Marketing,
    /// Customer service (`cs-` roles).
    CustomerService,
    /// Credit decisioning (`cd-` roles).
    Credit,
    /// Credit operations (`co-` roles).
    CreditOperations,
    /// Accounting (`ac-` roles).
    Accounting,
}

/// Closed enumeration of staff roles on the loan-origination platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffRole {
    /// Structurally maximal role; never a valid grant or mutation target.
    Superadmin,
    /// Second tier; the only role eligible to receive delegated management.
    Admin,
    /// Business department head.
    BusinessSupervisor,
    /// Head of engineering.
    Cto,
    /// Human resources supervisor.
    HrSupervisor,
    /// Operations manager.
    OpManager,
    /// Marketing supervisor.
    MktSupervisor,
    /// Full-stack developer.
    FullstackDev,
    /// Product designer.
    UxUi,
    /// Junior data scientist.
    JuniorDs,
    /// Customer service supervisor.
    CsSupervisor,
    /// Credit decision supervisor.
    CdSupervisor,
    /// Credit operations supervisor.
    CoSupervisor,
    /// Accounting supervisor.
    AcSupervisor,
    /// Customer service officer.
    CsOfficer,
    /// Credit decision officer.
    CdOfficer,
    /// Credit committee member.
    CdCommittee,
    /// Credit operations officer.
    CoOfficer,
    /// Accounting officer.
    AcOfficer,
    /// Graphic designer.
    GraphicDesigner,
}

impl StaffRole {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::BusinessSupervisor => "business-supervisor",
            Self::Cto => "cto",
            Self::HrSupervisor => "hr-supervisor",
            Self::OpManager => "op-manager",
            Self::MktSupervisor => "mkt-supervisor",
            Self::FullstackDev => "fullstack-dev",
            Self::UxUi => "ux/ui",
            Self::JuniorDs => "junior-ds",
            Self::CsSupervisor => "cs-supervisor",
            Self::CdSupervisor => "cd-supervisor",
            Self::CoSupervisor => "co-supervisor",
            Self::AcSupervisor => "ac-supervisor",
            Self::CsOfficer => "cs-officer",
            Self::CdOfficer => "cd-officer",
            Self::CdCommittee => "cd-committee",
            Self::CoOfficer => "co-officer",
            Self::AcOfficer => "ac-officer",
            Self::GraphicDesigner => "graphic-designer",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[StaffRole] = &[
            StaffRole::Superadmin,
            StaffRole::Admin,
            StaffRole::BusinessSupervisor,
            StaffRole::Cto,
            StaffRole::HrSupervisor,
            StaffRole::OpManager,
            StaffRole::MktSupervisor,
            StaffRole::FullstackDev,
            StaffRole::UxUi,
            StaffRole::JuniorDs,
            StaffRole::CsSupervisor,
            StaffRole::CdSupervisor,
            StaffRole::CoSupervisor,
            StaffRole::AcSupervisor,
            StaffRole::CsOfficer,
            StaffRole::CdOfficer,
            StaffRole::CdCommittee,
            StaffRole::CoOfficer,
            StaffRole::AcOfficer,
            StaffRole::GraphicDesigner,
        ];

        ALL
    }

    /// Returns whether this role is shielded from delegated visibility
    /// and role enumeration.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Superadmin | Self::Admin | Self::BusinessSupervisor | Self::Cto
        )
    }
}

impl FromStr for StaffRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|role| role.as_str() == value)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("unknown staff role '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::StaffRole;

    #[test]
    fn role_roundtrip_storage_value() {
        for role in StaffRole::all() {
            let restored = StaffRole::from_str(role.as_str());
            assert_eq!(restored.ok(), Some(*role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = StaffRole::from_str("ceo");
        assert!(parsed.is_err());
    }

    #[test]
    fn storage_values_are_distinct() {
        let values: HashSet<&str> = StaffRole::all().iter().map(StaffRole::as_str).collect();
        assert_eq!(values.len(), StaffRole::all().len());
    }

    #[test]
    fn protected_set_matches_policy() {
        let protected: Vec<StaffRole> = StaffRole::all()
            .iter()
            .copied()
            .filter(StaffRole::is_protected)
            .collect();
        assert_eq!(
            protected,
            vec![
                StaffRole::Superadmin,
                StaffRole::Admin,
                StaffRole::BusinessSupervisor,
                StaffRole::Cto,
            ]
        );
    }
}
