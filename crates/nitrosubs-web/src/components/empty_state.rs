//! Empty state component for pages rendered outside the shell's scope

use leptos::prelude::*;
use leptos_router::components::A;

/// Placeholder shown where a business page plugs in
#[component]
pub fn EmptyState(
    /// Page title (e.g., "Despesas", "Usuários")
    #[prop(into)]
    title: String,
    /// What the page is for
    #[prop(into)]
    description: String,
    /// Optional link back to a known page: (label, href)
    #[prop(optional)]
    back: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // Construction icon (lucide-construction)
                    <rect x="2" y="6" width="20" height="8" rx="1"/>
                    <path d="M17 14v7"/>
                    <path d="M7 14v7"/>
                    <path d="M17 3v3"/>
                    <path d="M7 3v3"/>
                    <path d="M10 14 2.3 6.3"/>
                    <path d="m14 6 7.7 7.7"/>
                    <path d="m8 6 8 8"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>

            {back.map(|(label, href)| {
                view! {
                    <div class="empty-state-actions">
                        <A href=href attr:class="empty-state-button">
                            {label}
                        </A>
                    </div>
                }
            })}
        </div>
    }
}
