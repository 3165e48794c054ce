//! Header component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use nitrosubs_core::{logout_and_redirect, toggle_theme, HeaderModel};

use super::icons::{ChevronDownIcon, LogOutIcon, MoonIcon, SunIcon};
use crate::context::{use_auth, use_theme, RouterNavigator};

/// Header with theme toggle and the user dropdown.
/// Renders nothing while logged out.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let navigate = use_navigate();

    let (menu_open, set_menu_open) = signal(false);
    let model = Memo::new(move |_| HeaderModel::from_session(auth.session().as_ref()));

    move || {
        let navigate = navigate.clone();
        model.get().map(|user| {
            let HeaderModel {
                name,
                email,
                initial,
                role_label,
            } = user;
            let (dropdown_name, dropdown_email, dropdown_initial) =
                (name.clone(), email.clone(), initial.clone());

            view! {
                <header class="header">
                    <div class="header-actions">
                        <button
                            class="header-icon-button"
                            on:click=move |_| {
                                toggle_theme(&theme);
                            }
                        >
                            <Show when=move || theme.is_dark() fallback=|| view! { <SunIcon /> }>
                                <MoonIcon />
                            </Show>
                            <span class="sr-only">"Alternar tema"</span>
                        </button>

                        <div class="user-menu">
                            <button
                                class="user-menu-trigger"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                aria-haspopup="menu"
                                aria-expanded=move || menu_open.get().to_string()
                            >
                                <span class="avatar">{initial}</span>
                                <span class="user-menu-identity">
                                    <span class="user-menu-name">{name}</span>
                                    <span class="user-menu-email">{email}</span>
                                </span>
                                <span class="user-menu-chevron">
                                    <ChevronDownIcon />
                                </span>
                            </button>

                            <Show when=move || menu_open.get()>
                                <div
                                    class="dropdown-backdrop"
                                    on:click=move |_| set_menu_open.set(false)
                                ></div>
                            </Show>
                            <div class="dropdown" class:dropdown-open=move || menu_open.get() role="menu">
                                <div class="dropdown-label">
                                    <span class="avatar">{dropdown_initial}</span>
                                    <div class="dropdown-identity">
                                        <span class="dropdown-name">{dropdown_name}</span>
                                        <span class="dropdown-email">{dropdown_email}</span>
                                    </div>
                                </div>
                                <div class="dropdown-separator"></div>
                                <div class="dropdown-label dropdown-role">{role_label}</div>
                                <div class="dropdown-separator"></div>
                                <button
                                    class="dropdown-item dropdown-item-destructive"
                                    role="menuitem"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        logout_and_redirect(&auth, &RouterNavigator(navigate.clone()));
                                    }
                                >
                                    <LogOutIcon />
                                    <span>"Sair"</span>
                                </button>
                            </div>
                        </div>
                    </div>
                </header>
            }
        })
    }
}
