//! Sign-in page, parameterized by role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Students and managers authenticate against different endpoints but share
//! this form. After a successful login the pending redirect (if any) is
//! consumed exactly once; otherwise the role's dashboard is the target.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{Credentials, Role};
use crate::state::session::SessionState;

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let register_href = match role {
        Role::Student => "/student/register",
        Role::Manager => "/manager/register",
    };
    let (other_label, other_href) = match role {
        Role::Student => ("Manager sign in", "/manager/login"),
        Role::Manager => ("Student sign in", "/student/login"),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, role, &credentials).await {
                    Ok(user) => {
                        let pending = crate::util::storage::take_pending_redirect();
                        let target = crate::util::guard::resolve_post_login(pending, user.role);
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(format!("Sign in failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{format!("{} Sign In", role.label())}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__links">
                    <a href=register_href>"Create an account"</a>
                    " · "
                    <a href=other_href>{other_label}</a>
                </p>
            </div>
        </div>
    }
}

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
