//! Inline Lucide-style SVG icons

use leptos::prelude::*;
use nitrosubs_core::Icon;

/// 24x24 stroked Lucide frame
#[component]
fn Lucide(#[prop(default = 20)] size: u32, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

/// Icon of a navigation entry
#[component]
pub fn NavIcon(icon: Icon) -> impl IntoView {
    match icon {
        Icon::LayoutDashboard => view! {
            <Lucide>
                <rect width="7" height="9" x="3" y="3" rx="1"/>
                <rect width="7" height="5" x="14" y="3" rx="1"/>
                <rect width="7" height="9" x="14" y="12" rx="1"/>
                <rect width="7" height="5" x="3" y="16" rx="1"/>
            </Lucide>
        }
        .into_any(),
        Icon::Receipt => view! {
            <Lucide>
                <path d="M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1Z"/>
                <path d="M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8"/>
                <path d="M12 17.5v-11"/>
            </Lucide>
        }
        .into_any(),
        Icon::CheckSquare => view! {
            <Lucide>
                <polyline points="9 11 12 14 22 4"/>
                <path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"/>
            </Lucide>
        }
        .into_any(),
        Icon::Bell => view! {
            <Lucide>
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/>
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/>
            </Lucide>
        }
        .into_any(),
        Icon::Building2 => view! {
            <Lucide>
                <path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/>
                <path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/>
                <path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/>
                <path d="M10 6h4"/>
                <path d="M10 10h4"/>
                <path d="M10 14h4"/>
                <path d="M10 18h4"/>
            </Lucide>
        }
        .into_any(),
        Icon::FolderTree => view! {
            <Lucide>
                <path d="M20 10a1 1 0 0 0 1-1V6a1 1 0 0 0-1-1h-2.5a1 1 0 0 1-.8-.4l-.9-1.2A1 1 0 0 0 15 3h-2a1 1 0 0 0-1 1v5a1 1 0 0 0 1 1Z"/>
                <path d="M20 21a1 1 0 0 0 1-1v-3a1 1 0 0 0-1-1h-2.9a1 1 0 0 1-.88-.55l-.42-.85a1 1 0 0 0-.92-.6H13a1 1 0 0 0-1 1v5a1 1 0 0 0 1 1Z"/>
                <path d="M3 5a2 2 0 0 0 2 2h3"/>
                <path d="M3 3v13a2 2 0 0 0 2 2h3"/>
            </Lucide>
        }
        .into_any(),
        Icon::Tag => view! {
            <Lucide>
                <path d="M12 2H2v10l9.29 9.29c.94.94 2.48.94 3.42 0l6.58-6.58c.94-.94.94-2.48 0-3.42L12 2Z"/>
                <path d="M7 7h.01"/>
            </Lucide>
        }
        .into_any(),
        Icon::Users => view! {
            <Lucide>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            </Lucide>
        }
        .into_any(),
    }
}

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <Lucide size=16>
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2"/>
            <path d="M12 20v2"/>
            <path d="m4.93 4.93 1.41 1.41"/>
            <path d="m17.66 17.66 1.41 1.41"/>
            <path d="M2 12h2"/>
            <path d="M20 12h2"/>
            <path d="m6.34 17.66-1.41 1.41"/>
            <path d="m19.07 4.93-1.41 1.41"/>
        </Lucide>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <Lucide size=16>
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
        </Lucide>
    }
}

#[component]
pub fn LogOutIcon() -> impl IntoView {
    view! {
        <Lucide size=16>
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <polyline points="16 17 21 12 16 7"/>
            <line x1="21" x2="9" y1="12" y2="12"/>
        </Lucide>
    }
}

#[component]
pub fn ChevronDownIcon() -> impl IntoView {
    view! {
        <Lucide size=16>
            <path d="m6 9 6 6 6-6"/>
        </Lucide>
    }
}

#[component]
pub fn ChevronLeftIcon() -> impl IntoView {
    view! {
        <Lucide size=12>
            <path d="m15 18-6-6 6-6"/>
        </Lucide>
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <Lucide>
            <line x1="4" x2="20" y1="12" y2="12"/>
            <line x1="4" x2="20" y1="6" y2="6"/>
            <line x1="4" x2="20" y1="18" y2="18"/>
        </Lucide>
    }
}
