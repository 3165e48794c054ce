//! Header identity model and session actions

use tracing::info;

use crate::models::Session;
use crate::providers::{Navigator, SessionProvider};

/// Route the app redirects to after logout
pub const LOGIN_ROUTE: &str = "/login";

/// Avatar initial used when the name is missing or empty
pub const PLACEHOLDER_INITIAL: char = 'U';

/// First character of `name`, uppercased, or [`PLACEHOLDER_INITIAL`]
pub fn display_initial(name: Option<&str>) -> String {
    match name.and_then(|n| n.chars().next()) {
        Some(first) => first.to_uppercase().collect(),
        None => PLACEHOLDER_INITIAL.to_string(),
    }
}

/// Everything the header renders for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub name: String,
    pub email: String,
    pub initial: String,
    pub role_label: String,
}

impl HeaderModel {
    /// `None` means the header renders nothing
    pub fn from_session(session: Option<&Session>) -> Option<Self> {
        let session = session?;
        Some(Self {
            name: session.display_name().to_string(),
            email: session.email.clone(),
            initial: display_initial(session.name.as_deref()),
            role_label: session.role.label().to_string(),
        })
    }
}

/// Clear the session, then go to the login route
///
/// Logout runs first so the next route's guards see no identity.
pub fn logout_and_redirect<S, N>(session: &S, navigator: &N)
where
    S: SessionProvider + ?Sized,
    N: Navigator + ?Sized,
{
    info!("logging out");
    session.logout();
    navigator.navigate(LOGIN_ROUTE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_display_initial() {
        assert_eq!(display_initial(Some("ana")), "A");
        assert_eq!(display_initial(Some("élodie")), "É");
        assert_eq!(display_initial(Some("")), "U");
        assert_eq!(display_initial(None), "U");
    }

    #[test]
    fn test_no_session_renders_nothing() {
        assert_eq!(HeaderModel::from_session(None), None);
    }

    #[test]
    fn test_header_model_for_leader() {
        let session = Session::new("bruno lima", "bruno@nitro.dev", Role::Leader);
        let model = HeaderModel::from_session(Some(&session)).unwrap();

        assert_eq!(model.name, "bruno lima");
        assert_eq!(model.email, "bruno@nitro.dev");
        assert_eq!(model.initial, "B");
        assert_eq!(model.role_label, "Líder");
    }
}
