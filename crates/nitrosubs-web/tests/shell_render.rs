//! Server-side render checks for the header and sidebar
#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;
use nitrosubs_core::{Role, Session};
use nitrosubs_web::components::{Header, Sidebar};
use nitrosubs_web::context::{AuthContext, ThemeContext};

fn render_chrome(path: &str, session: Option<Session>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));

        let auth = AuthContext::restore();
        if let Some(session) = session {
            auth.login(session);
        }
        provide_context(auth);
        provide_context(ThemeContext::restore());

        view! {
            <Router>
                <Header />
                <Sidebar />
            </Router>
        }
        .to_html()
    })
}

fn session(name: &str, role: Role) -> Session {
    Session::new(name, format!("{}@nitrosubs.test", name.to_lowercase()), role)
}

#[test]
fn test_header_hidden_without_session() {
    let html = render_chrome("/dashboard", None);

    assert!(!html.contains("Sair"));
    assert!(!html.contains("Alternar tema"));
}

#[test]
fn test_header_shows_identity_and_actions() {
    let html = render_chrome("/dashboard", Some(session("Ana", Role::Leader)));

    assert!(html.contains("Ana"));
    assert!(html.contains("ana@nitrosubs.test"));
    assert!(html.contains("Líder"));
    assert!(html.contains("Alternar tema"));
    assert!(html.contains("Sair"));
}

#[test]
fn test_sidebar_uses_session_capabilities() {
    let leader = render_chrome("/validations", Some(session("Ana", Role::Leader)));
    assert!(leader.contains("Validações"));
    assert!(leader.contains("sidebar-link-active"));
    assert!(!leader.contains("Cadastros"));
    assert!(!leader.contains("/users"));

    let admin = render_chrome("/users", Some(session("Bia", Role::SystemAdmin)));
    assert!(admin.contains("Cadastros"));
    assert!(admin.contains("Usuários"));
    assert!(admin.contains("/companies"));

    let user = render_chrome("/dashboard", Some(session("Caio", Role::User)));
    assert!(!user.contains("Validações"));
    assert!(!user.contains("Cadastros"));
    assert!(user.contains("Despesas"));
}

#[test]
fn test_desktop_sidebar_starts_expanded() {
    let html = render_chrome("/dashboard", Some(session("Ana", Role::User)));

    assert!(html.contains("sidebar-desktop"));
    assert!(html.contains("Recolher menu"));
    assert!(html.contains("Beta"));
}
