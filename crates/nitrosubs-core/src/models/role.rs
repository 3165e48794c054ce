//! User roles and the capabilities they grant
//!
//! Roles arrive from the backend as tags (`system_admin`, `finance_admin`,
//! `leader`, `user`). Navigation never looks at the role directly: it asks the
//! [`CapabilitySet`] derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tag carried by a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SystemAdmin,
    FinanceAdmin,
    Leader,
    User,
    /// Tag the shell does not recognise; grants nothing
    Other(String),
}

impl Role {
    /// Parse a backend tag, case-insensitively
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "system_admin" => Role::SystemAdmin,
            "finance_admin" => Role::FinanceAdmin,
            "leader" => Role::Leader,
            "user" => Role::User,
            _ => Role::Other(tag.trim().to_string()),
        }
    }

    /// Wire tag for this role
    pub fn tag(&self) -> &str {
        match self {
            Role::SystemAdmin => "system_admin",
            Role::FinanceAdmin => "finance_admin",
            Role::Leader => "leader",
            Role::User => "user",
            Role::Other(tag) => tag,
        }
    }

    /// Human-readable label shown in the header dropdown
    pub fn label(&self) -> &str {
        match self {
            Role::SystemAdmin => "Administrador do Sistema",
            Role::FinanceAdmin => "Administrador Financeiro",
            Role::Leader => "Líder",
            Role::User => "Usuário",
            Role::Other(tag) => tag,
        }
    }

    /// Capabilities granted by this role
    pub fn capabilities(&self) -> CapabilitySet {
        match self {
            Role::SystemAdmin | Role::FinanceAdmin => {
                CapabilitySet::of(&[Capability::Admin, Capability::Leader])
            }
            Role::Leader => CapabilitySet::of(&[Capability::Leader]),
            Role::User | Role::Other(_) => CapabilitySet::empty(),
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Role::from_tag(&tag)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.tag().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Permission that gates navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Access to the registry pages (companies, departments, categories, users)
    Admin,
    /// Access to expense validations
    Leader,
}

impl Capability {
    const fn bit(self) -> u8 {
        match self {
            Capability::Admin => 0b01,
            Capability::Leader => 0b10,
        }
    }
}

/// Set of capabilities, evaluated once per render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn of(capabilities: &[Capability]) -> Self {
        capabilities
            .iter()
            .fold(Self::empty(), |set, cap| set.with(*cap))
    }

    /// Build from the two boolean flags an auth provider exposes
    pub fn from_flags(is_admin: bool, is_leader: bool) -> Self {
        let mut set = Self::empty();
        if is_admin {
            set = set.with(Capability::Admin);
        }
        if is_leader {
            set = set.with(Capability::Leader);
        }
        set
    }

    #[must_use]
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// True when `requirement` is absent or held
    pub fn satisfies(self, requirement: Option<Capability>) -> bool {
        requirement.map_or(true, |cap| self.contains(cap))
    }

    /// True when every capability in `required` is held
    pub const fn covers(self, required: CapabilitySet) -> bool {
        self.0 & required.0 == required.0
    }

    pub const fn is_admin(self) -> bool {
        self.contains(Capability::Admin)
    }

    pub const fn is_leader(self) -> bool {
        self.contains(Capability::Leader)
    }
}

impl From<Option<Capability>> for CapabilitySet {
    fn from(requirement: Option<Capability>) -> Self {
        requirement.map_or(Self::empty(), |cap| Self::empty().with(cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_requires_every_capability() {
        let both = CapabilitySet::from_flags(true, true);
        let leader = CapabilitySet::from_flags(false, true);

        assert!(both.covers(both));
        assert!(leader.covers(CapabilitySet::empty()));
        assert!(!leader.covers(both));
        assert!(!CapabilitySet::empty().covers(Some(Capability::Admin).into()));
    }

    #[test]
    fn test_role_from_tag_is_case_insensitive() {
        assert_eq!(Role::from_tag("SYSTEM_ADMIN"), Role::SystemAdmin);
        assert_eq!(Role::from_tag("finance_admin"), Role::FinanceAdmin);
        assert_eq!(Role::from_tag(" Leader "), Role::Leader);
        assert_eq!(Role::from_tag("user"), Role::User);
        assert_eq!(Role::from_tag("auditor"), Role::Other("auditor".to_string()));
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::SystemAdmin.label(), "Administrador do Sistema");
        assert_eq!(Role::FinanceAdmin.label(), "Administrador Financeiro");
        assert_eq!(Role::Leader.label(), "Líder");
        assert_eq!(Role::User.label(), "Usuário");
        assert_eq!(Role::Other("auditor".into()).label(), "auditor");
    }

    #[test]
    fn test_role_capabilities() {
        assert!(Role::SystemAdmin.capabilities().is_admin());
        assert!(Role::SystemAdmin.capabilities().is_leader());
        assert!(Role::FinanceAdmin.capabilities().is_admin());
        assert!(!Role::Leader.capabilities().is_admin());
        assert!(Role::Leader.capabilities().is_leader());
        assert_eq!(Role::User.capabilities(), CapabilitySet::empty());
        assert_eq!(Role::Other("x".into()).capabilities(), CapabilitySet::empty());
    }

    #[test]
    fn test_role_serde_uses_tags() {
        let json = serde_json::to_string(&Role::FinanceAdmin).unwrap();
        assert_eq!(json, "\"finance_admin\"");

        let role: Role = serde_json::from_str("\"LEADER\"").unwrap();
        assert_eq!(role, Role::Leader);
    }

    #[test]
    fn test_capability_set_flags() {
        let set = CapabilitySet::from_flags(false, true);
        assert!(set.is_leader());
        assert!(!set.is_admin());
        assert!(set.satisfies(None));
        assert!(set.satisfies(Some(Capability::Leader)));
        assert!(!set.satisfies(Some(Capability::Admin)));
        assert_eq!(set, CapabilitySet::of(&[Capability::Leader]));
    }
}
