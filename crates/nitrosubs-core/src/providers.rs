//! Collaborator contracts the shell consumes
//!
//! The web layer implements these over Leptos contexts and the router; tests
//! implement them with in-memory fakes.

use tracing::debug;

use crate::models::{Session, Theme};

/// Source of the current session and owner of logout
pub trait SessionProvider {
    fn current(&self) -> Option<Session>;

    /// Clear the session and any persisted auth state
    fn logout(&self);
}

/// Source and setter of the color scheme
pub trait ThemeProvider {
    fn theme(&self) -> Theme;
    fn set_theme(&self, theme: Theme);
}

/// Client-side route navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Flip the provider's theme and return the new value
pub fn toggle_theme<T: ThemeProvider + ?Sized>(provider: &T) -> Theme {
    let next = provider.theme().toggled();
    debug!(theme = %next, "toggling theme");
    provider.set_theme(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedTheme(Cell<Theme>);

    impl ThemeProvider for FixedTheme {
        fn theme(&self) -> Theme {
            self.0.get()
        }

        fn set_theme(&self, theme: Theme) {
            self.0.set(theme);
        }
    }

    #[test]
    fn test_toggle_theme_goes_through_provider() {
        let provider = FixedTheme(Cell::new(Theme::Light));

        assert_eq!(toggle_theme(&provider), Theme::Dark);
        assert_eq!(provider.theme(), Theme::Dark);

        assert_eq!(toggle_theme(&provider), Theme::Light);
        assert_eq!(provider.theme(), Theme::Light);
    }
}
