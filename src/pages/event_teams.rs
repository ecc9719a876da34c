//! Manager review of an event's registrations with payment verification.
//!
//! DESIGN
//! ======
//! The team list is loaded manually (not via a resource) because payment
//! verification triggers targeted reloads; each load takes a generation
//! ticket and a response only commits if it is still the newest, so a slow
//! reload can never overwrite a fresher one. Export links are plain
//! anchors to the API's export endpoints.

#[cfg(test)]
#[path = "event_teams_test.rs"]
mod event_teams_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;
use crate::net::types::{Team, TeamMember};
use crate::state::session::SessionState;
use crate::util::refetch::Generation;

#[component]
pub fn EventTeamsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let event = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { crate::net::api::fetch_event(&id).await }
    });

    let teams = RwSignal::new(None::<Result<Vec<Team>, ApiError>>);
    let generation = RwSignal::new(Generation::new());
    let verifying = RwSignal::new(None::<String>);
    let info = RwSignal::new(String::new());

    let load_teams = move || {
        let event_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
        let token = session.with_untracked(|s| s.token.clone());
        let mut ticket = 0;
        generation.update(|g| ticket = g.begin());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = token else {
                return;
            };
            let result = crate::net::api::fetch_event_teams(&token, &event_id).await;
            if let Err(err) = &result {
                crate::state::session::note_api_error(session, err);
            }
            // A newer reload owns the slot; drop this response.
            if generation.with_untracked(|g| g.is_current(ticket)) {
                teams.set(Some(result));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (event_id, token, ticket);
        }
    };

    Effect::new(move || {
        // Track the route param so navigating to another event reloads.
        let _ = params.with(|p| p.get("id"));
        load_teams();
    });

    let on_verify = move |team_id: String| {
        if verifying.get().is_some() {
            return;
        }
        verifying.set(Some(team_id.clone()));
        info.set(String::new());
        let token = session.with_untracked(|s| s.token.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = token else {
                verifying.set(None);
                return;
            };
            match crate::net::api::verify_payment(&token, &team_id).await {
                Ok(_team) => load_teams(),
                Err(err) => {
                    crate::state::session::note_api_error(session, &err);
                    info.set(format!("Payment verification failed: {err}"));
                }
            }
            verifying.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (team_id, token);
        }
    };

    let event_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let export_csv = move || crate::net::api::export_endpoint(&event_id(), "csv");
    let export_pdf = move || crate::net::api::export_endpoint(&event_id(), "pdf");

    view! {
        <div class="event-teams-page">
            <Suspense fallback=move || view! { <p class="page-loading">"Loading event..."</p> }>
                {move || {
                    event
                        .get()
                        .map(|result| match result {
                            Ok(target) => {
                                view! {
                                    <header class="event-teams-page__header">
                                        <h1>{format!("Registrations: {}", target.title)}</h1>
                                    </header>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="page-error">
                                        {format!("Failed to load event: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <div class="event-teams-page__toolbar">
                <a class="btn" href=export_csv target="_blank">
                    "Export CSV"
                </a>
                <a class="btn" href=export_pdf target="_blank">
                    "Export PDF"
                </a>
            </div>

            {move || match teams.get() {
                None => view! { <p class="page-loading">"Loading teams..."</p> }.into_any(),
                Some(Err(err)) => {
                    view! {
                        <p class="page-error">{format!("Failed to load teams: {err}")}</p>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    if list.is_empty() {
                        view! {
                            <p class="event-teams-page__empty">"No teams registered yet."</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="event-teams-page__summary">
                                {summary_line(list.len(), verified_count(&list))}
                            </p>
                            <ul class="event-teams-page__list">
                                {list
                                    .into_iter()
                                    .map(|team| {
                                        let verified = team.payment_verified;
                                        let (badge_class, badge_label) = payment_badge(verified);
                                        let verify_click = Callback::new({
                                            let id = team.id.clone();
                                            move |()| on_verify(id.clone())
                                        });
                                        let verify_label = Callback::new({
                                            let id = team.id.clone();
                                            move |()| {
                                                if verifying.get().as_deref() == Some(id.as_str()) {
                                                    "Verifying..."
                                                } else {
                                                    "Verify Payment"
                                                }
                                            }
                                        });
                                        view! {
                                            <li class="team-row">
                                                <span class="team-row__name">{team.name.clone()}</span>
                                                <span class="team-row__members">
                                                    {member_summary(&team.members)}
                                                </span>
                                                <span class="team-row__txn">
                                                    {team
                                                        .transaction_id
                                                        .clone()
                                                        .unwrap_or_else(|| "no reference".to_owned())}
                                                </span>
                                                <span class=badge_class>{badge_label}</span>
                                                <Show when=move || !verified>
                                                    <button
                                                        class="btn team-row__verify"
                                                        disabled=move || verifying.get().is_some()
                                                        on:click=move |_| verify_click.run(())
                                                    >
                                                        {move || verify_label.run(())}
                                                    </button>
                                                </Show>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            }}

            <Show when=move || !info.get().is_empty()>
                <p class="page-error">{move || info.get()}</p>
            </Show>
        </div>
    }
}

fn member_summary(members: &[TeamMember]) -> String {
    members
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn verified_count(teams: &[Team]) -> usize {
    teams.iter().filter(|t| t.payment_verified).count()
}

fn summary_line(total: usize, verified: usize) -> String {
    let teams = if total == 1 { "team" } else { "teams" };
    format!("{total} {teams} · {verified} payments verified")
}

fn payment_badge(verified: bool) -> (&'static str, &'static str) {
    if verified {
        ("badge badge--verified", "Payment verified")
    } else {
        ("badge badge--pending", "Payment pending")
    }
}
