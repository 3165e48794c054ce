//! Session and theme contexts
//!
//! Both are `Copy` handles over signals, provided once at the app root and
//! read with [`use_auth`] / [`use_theme`]. They implement the core provider
//! traits so header actions go through the same code paths the core tests
//! exercise.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use nitrosubs_core::{CapabilitySet, Preferences, Session, Theme};
use tracing::{info, warn};

use crate::storage;

/// Authenticated session state
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Restore the session persisted by a previous login, if any
    pub fn restore() -> Self {
        let session = storage::read(storage::SESSION_KEY).and_then(|raw| {
            Session::from_json(&raw)
                .map_err(|e| {
                    warn!(subject = e.subject(), error = %e, "discarding stored value");
                    storage::remove(storage::SESSION_KEY);
                })
                .ok()
        });

        Self {
            session: RwSignal::new(session),
        }
    }

    /// Current session (tracked)
    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Capabilities of the current session; empty when logged out
    pub fn capabilities(&self) -> CapabilitySet {
        self.session
            .with(|s| s.as_ref().map(Session::capabilities).unwrap_or_default())
    }

    pub fn login(&self, session: Session) {
        info!(role = session.role.tag(), "session started");
        storage::write(storage::SESSION_KEY, &session.to_json());
        self.session.set(Some(session));
    }
}

impl nitrosubs_core::SessionProvider for AuthContext {
    fn current(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    fn logout(&self) {
        storage::remove(storage::SESSION_KEY);
        self.session.set(None);
    }
}

/// Color scheme state, persisted in [`Preferences`]
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn restore() -> Self {
        let prefs = Preferences::load(storage::read(Preferences::STORAGE_KEY).as_deref());
        Self {
            theme: RwSignal::new(prefs.theme),
        }
    }

    /// Current theme (tracked)
    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(|t| t.is_dark())
    }
}

impl nitrosubs_core::ThemeProvider for ThemeContext {
    fn theme(&self) -> Theme {
        self.theme.get_untracked()
    }

    fn set_theme(&self, theme: Theme) {
        storage::write(Preferences::STORAGE_KEY, &Preferences { theme }.to_json());
        self.theme.set(theme);
    }
}

/// Router navigation behind the core [`Navigator`](nitrosubs_core::Navigator) trait
pub struct RouterNavigator<F>(pub F);

impl<F> nitrosubs_core::Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Auth provider component (wraps app root)
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::restore());

    children()
}

/// Theme provider component: restores the stored scheme and mirrors it on `<html>`
#[component]
pub fn ColorSchemeProvider(children: Children) -> impl IntoView {
    let theme = ThemeContext::restore();
    provide_context(theme);

    Effect::new(move |_| storage::apply_theme_class(theme.is_dark()));

    children()
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Hook to access the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
