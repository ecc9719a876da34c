//! Top navigation bar with role-conditioned links.
//!
//! DESIGN
//! ======
//! The link set is a pure function of session state so the chrome shown to
//! anonymous visitors, students, and managers stays in one testable place.
//! The component itself only renders that set plus identity/logout and the
//! dark-mode toggle.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;

/// One navigation affordance in the shared chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// Navigation links for the current session role.
pub fn nav_links(state: &SessionState) -> Vec<NavLink> {
    match state.role() {
        None => vec![
            link("Browse Events", "/"),
            link("About", "/about"),
            link("Contact", "/contact"),
            link("Student Sign In", "/student/login"),
            link("Manager Sign In", "/manager/login"),
        ],
        Some(Role::Student) => vec![
            link("Dashboard", "/student/dashboard"),
            link("Browse Events", "/"),
            link("My Registrations", "/student/registered"),
        ],
        Some(Role::Manager) => vec![
            link("Dashboard", "/manager/dashboard"),
            link("Create Event", "/manager/events/new"),
            link("My Events", "/manager/events"),
        ],
    }
}

/// Shared top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let identity = move || {
        session
            .get()
            .user
            .map(|user| format!("{} ({})", user.name, user.role.label()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "EventHub"
            </a>
            <div class="navbar__links">
                {move || {
                    nav_links(&session.get())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a class="navbar__link" href=item.href>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <span class="navbar__spacer"></span>
            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <Show when=move || session.get().is_authenticated()>
                <span class="navbar__identity">{identity}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
