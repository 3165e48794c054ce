//! Login page: starts a local session for the shell

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use nitrosubs_core::{Role, Session};

use crate::components::HOME_ROUTE;
use crate::context::use_auth;

const ROLE_CHOICES: [Role; 4] = [Role::User, Role::Leader, Role::FinanceAdmin, Role::SystemAdmin];

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(Role::User);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let session = Session {
            name: Some(name.get_untracked().trim().to_string()).filter(|n| !n.is_empty()),
            email: email.get_untracked().trim().to_string(),
            role: role.get_untracked(),
        };
        auth.login(session);
        navigate(HOME_ROUTE, Default::default());
    };

    view! {
        <Show
            when=move || !auth.is_authenticated()
            fallback=|| view! { <Redirect path=HOME_ROUTE /> }
        >
            <div class="login">
                <form class="login-card" on:submit=on_submit.clone()>
                    <h1 class="login-title">
                        <span class="brand-name-primary">"Nitro"</span>
                        <span class="brand-name-muted">"Subs"</span>
                    </h1>
                    <label class="login-field">
                        <span>"Nome"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-field">
                        <span>"E-mail"</span>
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-field">
                        <span>"Perfil"</span>
                        <select on:change=move |ev| set_role.set(Role::from_tag(&event_target_value(&ev)))>
                            {ROLE_CHOICES
                                .iter()
                                .map(|choice| {
                                    let tag = choice.tag().to_string();
                                    let choice_role = choice.clone();
                                    view! {
                                        <option value=tag selected=move || role.get() == choice_role>
                                            {choice.label().to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="login-submit" type="submit">"Entrar"</button>
                </form>
            </div>
        </Show>
    }
}
