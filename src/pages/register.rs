//! Account registration page, parameterized by role.
//!
//! A successful registration returns a token, so the new identity is
//! signed in immediately and follows the same post-login redirect
//! resolution as the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{Role, Signup};
use crate::state::session::SessionState;

#[component]
pub fn RegisterPage(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let login_href = match role {
        Role::Student => "/student/login",
        Role::Manager => "/manager/login",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let signup = match validate_signup_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(signup) => signup,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::register(session, role, &signup).await {
                    Ok(user) => {
                        let pending = crate::util::storage::take_pending_redirect();
                        let target = crate::util::guard::resolve_post_login(pending, user.role);
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(format!("Registration failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (signup, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{format!("{} Registration", role.label())}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__links">
                    <a href=login_href>"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}

fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Signup, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Signup {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
