//! Student's registered-teams list with payment status.

#[cfg(test)]
#[path = "my_registrations_test.rs"]
mod my_registrations_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Team;
use crate::state::session::{self, SessionState};

#[component]
pub fn MyRegistrationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let teams = LocalResource::new(move || {
        let token = session.with(|s| s.token.clone());
        async move {
            let Some(token) = token else {
                return Err(ApiError::Unavailable);
            };
            let result = crate::net::api::fetch_my_teams(&token).await;
            if let Err(err) = &result {
                session::note_api_error(session, err);
            }
            result
        }
    });

    view! {
        <div class="registrations-page">
            <header class="registrations-page__header">
                <h1>"My Registrations"</h1>
            </header>
            <Suspense fallback=move || {
                view! { <p class="page-loading">"Loading registrations..."</p> }
            }>
                {move || {
                    teams
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="registrations-page__empty">
                                            "No registrations yet. "
                                            <a href="/">"Browse events"</a>
                                            " to get started."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="registrations-page__list">
                                            {list
                                                .into_iter()
                                                .map(render_team)
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="page-error">
                                        {format!("Failed to load registrations: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_team(team: Team) -> impl IntoView {
    let (badge_class, badge_label) = payment_badge(team.payment_verified);
    let event_label = team
        .event_title
        .clone()
        .unwrap_or_else(|| team.event_id.clone());
    let event_href = format!("/events/{}", team.event_id);
    let roster = member_count_label(team.members.len());

    view! {
        <li class="registration-row">
            <span class="registration-row__team">{team.name}</span>
            <a class="registration-row__event" href=event_href>
                {event_label}
            </a>
            <span class="registration-row__members">{roster}</span>
            <span class=badge_class>{badge_label}</span>
        </li>
    }
}

fn payment_badge(verified: bool) -> (&'static str, &'static str) {
    if verified {
        ("badge badge--verified", "Payment verified")
    } else {
        ("badge badge--pending", "Payment pending")
    }
}

fn member_count_label(count: usize) -> String {
    if count == 1 {
        "1 member".to_owned()
    } else {
        format!("{count} members")
    }
}
