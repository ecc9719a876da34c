//! Protected-route wrapper applying the session route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page is wrapped in `Protected` so unauthenticated and
//! wrong-role navigations redirect identically. Rendering is gated on the
//! same decision the redirect effect acts on, so protected content never
//! flashes before a redirect and never renders while the initial session
//! restore is still in flight.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision};

/// Gate `children` behind the route guard for the current location.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let current = move || guard::full_path(&pathname.get(), &search.get());

    guard::install_route_guard(session, current.clone(), use_navigate());

    view! {
        <Show
            when=move || matches!(guard::evaluate(&session.get(), &current()), GuardDecision::Allow)
            fallback=|| {
                view! {
                    <div class="page-waiting">
                        <p>"Checking access..."</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
