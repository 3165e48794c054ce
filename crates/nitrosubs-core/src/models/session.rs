//! Authenticated session identity

use serde::{Deserialize, Serialize};

use super::role::{CapabilitySet, Role};
use crate::error::CoreError;

/// Identity of the logged-in user for the current process lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name; may be missing or empty
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

impl Session {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            role,
        }
    }

    /// Capabilities derived from the role
    pub fn capabilities(&self) -> CapabilitySet {
        self.role.capabilities()
    }

    pub fn is_admin(&self) -> bool {
        self.capabilities().is_admin()
    }

    pub fn is_leader(&self) -> bool {
        self.capabilities().is_leader()
    }

    /// Name as displayed (empty when absent)
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Decode a session persisted by the auth provider
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|source| CoreError::SessionParse {
            message: source.to_string(),
            source,
        })
    }

    pub fn to_json(&self) -> String {
        // Only strings and a string-backed enum: serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_backend_payload() {
        let raw = r#"{"name":"Ana Souza","email":"ana@nitro.dev","role":"FINANCE_ADMIN"}"#;
        let session = Session::from_json(raw).unwrap();

        assert_eq!(session.display_name(), "Ana Souza");
        assert_eq!(session.role, Role::FinanceAdmin);
        assert!(session.is_admin());
        assert!(session.is_leader());
    }

    #[test]
    fn test_session_missing_name_is_tolerated() {
        let session = Session::from_json(r#"{"email":"x@y.z","role":"user"}"#).unwrap();
        assert_eq!(session.name, None);
        assert_eq!(session.display_name(), "");
        assert!(!session.is_admin());
        assert!(!session.is_leader());
    }

    #[test]
    fn test_session_malformed_payload() {
        let err = Session::from_json("{\"name\":").unwrap_err();
        assert!(matches!(err, CoreError::SessionParse { .. }));
    }

    #[test]
    fn test_session_json_roundtrip_keeps_role_tag() {
        let session = Session::new("Bruno", "bruno@nitro.dev", Role::Leader);
        let json = session.to_json();
        assert!(json.contains("\"role\":\"leader\""));
        assert_eq!(Session::from_json(&json).unwrap(), session);
    }
}
