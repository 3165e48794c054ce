//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use crate::components::{Header, Sidebar, HOME_ROUTE};
use crate::context::{use_auth, AuthProvider, ColorSchemeProvider};
use crate::pages::{Login, NotFound, SectionPage};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <ColorSchemeProvider>
                <Router>
                    <Shell />
                </Router>
            </ColorSchemeProvider>
        </AuthProvider>
    }
}

/// Sidebar + header around the routed content; both stay mounted across navigation
#[component]
fn Shell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="app">
            <Show when=move || auth.is_authenticated()>
                <Sidebar />
            </Show>
            <div class="app-main">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/") view=|| view! { <Redirect path=HOME_ROUTE /> } />
                        <Route path=path!("/dashboard") view=|| view! { <SectionPage route="/dashboard" /> } />
                        <Route path=path!("/expenses") view=|| view! { <SectionPage route="/expenses" /> } />
                        <Route path=path!("/validations") view=|| view! { <SectionPage route="/validations" /> } />
                        <Route path=path!("/alerts") view=|| view! { <SectionPage route="/alerts" /> } />
                        <Route path=path!("/companies") view=|| view! { <SectionPage route="/companies" /> } />
                        <Route path=path!("/departments") view=|| view! { <SectionPage route="/departments" /> } />
                        <Route path=path!("/categories") view=|| view! { <SectionPage route="/categories" /> } />
                        <Route path=path!("/users") view=|| view! { <SectionPage route="/users" /> } />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
