//! Sidebar navigation: role-filtered menu, collapsible on desktop,
//! slide-over sheet on mobile

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use nitrosubs_core::{build_menu, NavItem, NavMenu, NavSectionView, PanelState, RenderMode};

use super::icons::{ChevronLeftIcon, MenuIcon, NavIcon};
use crate::context::use_auth;
use crate::viewport::use_viewport;

/// Sidebar with navigation menu
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let viewport = use_viewport();

    // Local to this mount; never persisted
    let panel = RwSignal::new(PanelState::new());

    let menu = Memo::new(move |_| {
        let path = location.pathname.get();
        build_menu(auth.capabilities(), &path)
    });
    let mode = Memo::new(move |_| panel.with(|p| p.render_mode(viewport.get())));
    let labels_visible = Signal::derive(move || panel.with(|p| p.labels_visible(viewport.get())));

    view! {
        <Show
            when=move || mode.get().is_overlay()
            fallback=move || view! { <DesktopSidebar panel mode menu labels_visible /> }
        >
            <MobileSidebar panel mode menu labels_visible />
        </Show>
    }
}

#[component]
fn MobileSidebar(
    panel: RwSignal<PanelState>,
    mode: Memo<RenderMode>,
    menu: Memo<NavMenu>,
    labels_visible: Signal<bool>,
) -> impl IntoView {
    let open = move || mode.get().is_open();
    let close = move |_| panel.update(PanelState::close_mobile);

    view! {
        <>
            <button
                class="sidebar-trigger"
                on:click=move |_| panel.update(PanelState::open_mobile)
                aria-label="Abrir menu"
                aria-expanded=move || open().to_string()
            >
                <MenuIcon />
            </button>

            // Backdrop overlay
            <Show when=open>
                <div class="sidebar-backdrop" on:click=close></div>
            </Show>

            <aside class="sidebar sidebar-sheet" class:sidebar-open=open>
                <button class="sidebar-close" on:click=close aria-label="Fechar menu">
                    "✕"
                </button>
                <SidebarContent
                    menu
                    labels_visible
                    on_select=Callback::new(move |_| panel.update(PanelState::entry_selected))
                />
            </aside>
        </>
    }
}

#[component]
fn DesktopSidebar(
    panel: RwSignal<PanelState>,
    mode: Memo<RenderMode>,
    menu: Memo<NavMenu>,
    labels_visible: Signal<bool>,
) -> impl IntoView {
    let collapsed = move || mode.get().is_collapsed();

    view! {
        <aside class="sidebar sidebar-desktop" class:sidebar-collapsed=collapsed>
            <SidebarContent
                menu
                labels_visible
                on_select=Callback::new(|_| {})
            />

            <button
                class="sidebar-collapse-toggle"
                on:click=move |_| panel.update(PanelState::toggle_collapsed)
                aria-label=move || if collapsed() { "Expandir menu" } else { "Recolher menu" }
                aria-expanded=move || (!collapsed()).to_string()
            >
                <span class="sidebar-collapse-icon" class:rotated=collapsed>
                    <ChevronLeftIcon />
                </span>
            </button>
        </aside>
    }
}

/// Brand block plus the visible sections
#[component]
fn SidebarContent(
    menu: Memo<NavMenu>,
    labels_visible: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="sidebar-content">
            <div class="sidebar-brand">
                <A href="/dashboard" attr:class="brand-link" on:click=move |_| on_select.run(())>
                    <div class="brand-logo">
                        <span>"N"</span>
                    </div>
                    <Show when=move || labels_visible.get()>
                        <div class="brand-name">
                            <span class="brand-name-primary">"Nitro"</span>
                            <span class="brand-name-muted">"Subs"</span>
                            <span class="badge">"Beta"</span>
                        </div>
                    </Show>
                </A>
            </div>

            <div class="sidebar-scroll">
                {move || {
                    menu.get()
                        .sections
                        .into_iter()
                        .map(|section| view! { <NavSectionBlock section labels_visible on_select /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn NavSectionBlock(
    section: NavSectionView,
    labels_visible: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let heading = section.heading.map(|heading| {
        view! {
            <div class="nav-heading">
                <Show when=move || labels_visible.get()>
                    <div class="nav-heading-rule"></div>
                    <p class="nav-heading-label">{heading}</p>
                    <div class="nav-heading-rule nav-heading-rule-reverse"></div>
                </Show>
            </div>
        }
    });

    view! {
        {heading}
        <nav class="nav">
            <ul class="nav-list">
                {section
                    .items
                    .into_iter()
                    .map(|item| view! { <NavLink item labels_visible on_select /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem, labels_visible: Signal<bool>, on_select: Callback<()>) -> impl IntoView {
    let entry = item.entry;
    let class = if item.active {
        "sidebar-link sidebar-link-active"
    } else {
        "sidebar-link"
    };

    view! {
        <li class="nav-item">
            <A href=entry.route exact=true attr:class=class attr:title=entry.label on:click=move |_| on_select.run(())>
                <span class="sidebar-link-icon">
                    <NavIcon icon=entry.icon />
                </span>
                <Show when=move || labels_visible.get()>
                    <span class="sidebar-link-label">{entry.label}</span>
                </Show>
            </A>
        </li>
    }
}
