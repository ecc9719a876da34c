//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::Protected;
use crate::components::navbar::NavBar;
use crate::net::types::Role;
use crate::pages::{
    about::AboutPage, browse::BrowsePage, contact::ContactPage, event_detail::EventDetailPage,
    event_form::EventFormPage, event_teams::EventTeamsPage, login::LoginPage,
    manager_dashboard::ManagerDashboardPage, manager_events::ManagerEventsPage,
    my_registrations::MyRegistrationsPage, register::RegisterPage,
    student_dashboard::StudentDashboardPage, team_register::TeamRegisterPage,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, kicks off the one-time session
/// restore, and sets up client-side routing. The session signal provided
/// here is written only by `state::session` operations.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    // Restore the persisted session once at startup; protected views stay
    // in their waiting state until this settles `loading`.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::init();
        ui.update(|u| u.dark_mode = dark);

        leptos::task::spawn_local(async move {
            crate::state::session::restore(session).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/eventhub.css"/>
        <Title text="EventHub"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BrowsePage/>
                    <Route path=StaticSegment("events") view=BrowsePage/>
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"))
                        view=EventDetailPage
                    />
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>

                    <Route
                        path=(StaticSegment("student"), StaticSegment("login"))
                        view=|| view! { <LoginPage role=Role::Student/> }
                    />
                    <Route
                        path=(StaticSegment("student"), StaticSegment("register"))
                        view=|| view! { <RegisterPage role=Role::Student/> }
                    />
                    <Route
                        path=(StaticSegment("manager"), StaticSegment("login"))
                        view=|| view! { <LoginPage role=Role::Manager/> }
                    />
                    <Route
                        path=(StaticSegment("manager"), StaticSegment("register"))
                        view=|| view! { <RegisterPage role=Role::Manager/> }
                    />

                    <Route
                        path=(StaticSegment("student"), StaticSegment("dashboard"))
                        view=|| view! { <Protected><StudentDashboardPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("student"), StaticSegment("registered"))
                        view=|| view! { <Protected><MyRegistrationsPage/></Protected> }
                    />
                    <Route
                        path=(
                            StaticSegment("student"),
                            StaticSegment("events"),
                            ParamSegment("id"),
                            StaticSegment("register"),
                        )
                        view=|| view! { <Protected><TeamRegisterPage/></Protected> }
                    />

                    <Route
                        path=(StaticSegment("manager"), StaticSegment("dashboard"))
                        view=|| view! { <Protected><ManagerDashboardPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("manager"), StaticSegment("events"))
                        view=|| view! { <Protected><ManagerEventsPage/></Protected> }
                    />
                    <Route
                        path=(
                            StaticSegment("manager"),
                            StaticSegment("events"),
                            StaticSegment("new"),
                        )
                        view=|| view! { <Protected><EventFormPage/></Protected> }
                    />
                    <Route
                        path=(
                            StaticSegment("manager"),
                            StaticSegment("events"),
                            ParamSegment("id"),
                            StaticSegment("edit"),
                        )
                        view=|| view! { <Protected><EventFormPage/></Protected> }
                    />
                    <Route
                        path=(
                            StaticSegment("manager"),
                            StaticSegment("events"),
                            ParamSegment("id"),
                            StaticSegment("teams"),
                        )
                        view=|| view! { <Protected><EventTeamsPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
