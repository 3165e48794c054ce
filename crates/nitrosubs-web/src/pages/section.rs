//! Placeholder pages behind the navigation entries

use leptos::prelude::*;
use nitrosubs_core::navigation::{entry_for_route, route_requirement};

use crate::components::{EmptyState, RequireSession};

/// Guarded page for one navigation route, gated by its section and entry
#[component]
pub fn SectionPage(route: &'static str) -> impl IntoView {
    let entry = entry_for_route(route);
    let requires = route_requirement(route).unwrap_or_default();
    let title = entry.map_or(route, |e| e.label);

    view! {
        <RequireSession requires=requires>
            <EmptyState
                title=title
                description=format!("A página {} será exibida aqui.", title)
            />
        </RequireSession>
    }
}

/// Fallback for unknown routes
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <EmptyState
            title="Página não encontrada"
            description="O endereço acessado não existe."
            back=("Voltar ao Dashboard", "/dashboard")
        />
    }
}
