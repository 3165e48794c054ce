//! Route guard

use leptos::prelude::*;
use leptos_router::components::Redirect;
use nitrosubs_core::{CapabilitySet, LOGIN_ROUTE};

use crate::context::use_auth;

/// Landing route for sessions that open a page they may not see
pub const HOME_ROUTE: &str = "/dashboard";

/// Render children only for a session holding every capability in `requires`.
/// Anonymous visitors go to the login route, others to the dashboard.
#[component]
pub fn RequireSession(
    #[prop(optional)] requires: CapabilitySet,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let allowed = move || auth.is_authenticated() && auth.capabilities().covers(requires);

    view! {
        <Show
            when=allowed
            fallback=move || {
                let target = if auth.is_authenticated() { HOME_ROUTE } else { LOGIN_ROUTE };
                view! { <Redirect path=target /> }
            }
        >
            {children()}
        </Show>
    }
}
