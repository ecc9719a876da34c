//! Team registration form for an event.
//!
//! DESIGN
//! ======
//! Member rows are keyed signals so typing never recreates inputs when the
//! roster grows or shrinks. Validation runs client-side against the
//! event's team-size bounds before anything is sent; the submit button is
//! disabled while a registration is in flight.

#[cfg(test)]
#[path = "team_register_test.rs"]
mod team_register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::net::types::{Event, TeamMember, TeamRegistration};
use crate::state::session::SessionState;

/// One editable member row. Signal-backed fields keep input focus stable
/// while rows are added or removed around them.
#[derive(Clone, Copy)]
struct MemberRow {
    key: Uuid,
    name: RwSignal<String>,
    email: RwSignal<String>,
}

fn blank_row() -> MemberRow {
    MemberRow {
        key: Uuid::new_v4(),
        name: RwSignal::new(String::new()),
        email: RwSignal::new(String::new()),
    }
}

#[component]
pub fn TeamRegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let event = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { crate::net::api::fetch_event(&id).await }
    });

    let team_name = RwSignal::new(String::new());
    let transaction_id = RwSignal::new(String::new());
    let members = RwSignal::new(vec![blank_row()]);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_add_member = move |_| members.update(|rows| rows.push(blank_row()));
    let remove_member = move |key: Uuid| {
        members.update(|rows| {
            if rows.len() > 1 {
                rows.retain(|row| row.key != key);
            }
        });
    };

    let has_fee = move || {
        event
            .get()
            .map(|result| matches!(result, Ok(e) if e.entry_fee > 0))
            .unwrap_or(false)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(Ok(target)) = event.get() else {
            return;
        };
        let roster: Vec<(String, String)> = members
            .get()
            .iter()
            .map(|row| (row.name.get(), row.email.get()))
            .collect();
        let registration =
            match validate_team_input(&team_name.get(), &roster, &transaction_id.get(), &target) {
                Ok(registration) => registration,
                Err(msg) => {
                    info.set(msg);
                    return;
                }
            };
        busy.set(true);
        info.set("Submitting registration...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let event_id = target.id.clone();
            let token = session.with(|s| s.token.clone());
            leptos::task::spawn_local(async move {
                let Some(token) = token else {
                    busy.set(false);
                    return;
                };
                match crate::net::api::register_team(&token, &event_id, &registration).await {
                    Ok(_team) => navigate("/student/registered", NavigateOptions::default()),
                    Err(err) => {
                        crate::state::session::note_api_error(session, &err);
                        info.set(format!("Registration failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (registration, session);
        }
    };

    view! {
        <div class="team-form-page">
            <Suspense fallback=move || view! { <p class="page-loading">"Loading event..."</p> }>
                {move || {
                    event
                        .get()
                        .map(|result| match result {
                            Ok(target) => {
                                view! {
                                    <header class="team-form-page__header">
                                        <h1>{format!("Register for {}", target.title)}</h1>
                                        <p class="team-form-page__bounds">
                                            {format!(
                                                "Teams of {} to {} members.",
                                                target.min_team_size,
                                                target.max_team_size,
                                            )}
                                        </p>
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

            <form class="team-form" on:submit=on_submit>
                <label class="team-form__label">
                    "Team Name"
                    <input
                        class="team-form__input"
                        type="text"
                        placeholder="Team name"
                        prop:value=move || team_name.get()
                        on:input=move |ev| team_name.set(event_target_value(&ev))
                    />
                </label>

                <div class="team-form__members">
                    <For
                        each=move || members.get()
                        key=|row| row.key
                        children=move |row: MemberRow| {
                            let name = row.name;
                            let email = row.email;
                            let key = row.key;
                            view! {
                                <div class="team-form__member">
                                    <input
                                        class="team-form__input"
                                        type="text"
                                        placeholder="Member name"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="team-form__input"
                                        type="email"
                                        placeholder="member@example.com"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="btn team-form__remove"
                                        on:click=move |_| remove_member(key)
                                        title="Remove member"
                                        aria-label="Remove member"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
                <button type="button" class="btn" on:click=on_add_member>
                    "+ Add Member"
                </button>

                <Show when=has_fee>
                    <label class="team-form__label">
                        "Payment reference"
                        <input
                            class="team-form__input"
                            type="text"
                            placeholder="Transaction ID"
                            prop:value=move || transaction_id.get()
                            on:input=move |ev| transaction_id.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Register Team"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="team-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}

fn validate_team_input(
    team_name: &str,
    roster: &[(String, String)],
    transaction_id: &str,
    event: &Event,
) -> Result<TeamRegistration, String> {
    let team_name = team_name.trim();
    if team_name.is_empty() {
        return Err("Enter a team name.".to_owned());
    }

    let count = u32::try_from(roster.len()).unwrap_or(u32::MAX);
    if count < event.min_team_size {
        return Err(format!(
            "This event needs at least {} members per team.",
            event.min_team_size
        ));
    }
    if count > event.max_team_size {
        return Err(format!(
            "This event allows at most {} members per team.",
            event.max_team_size
        ));
    }

    let mut members = Vec::with_capacity(roster.len());
    let mut seen = Vec::new();
    for (index, (name, email)) in roster.iter().enumerate() {
        let name = name.trim();
        let email = email.trim();
        let position = index + 1;
        if name.is_empty() {
            return Err(format!("Member {position} needs a name."));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(format!("Member {position} needs a valid email."));
        }
        let lowered = email.to_ascii_lowercase();
        if seen.contains(&lowered) {
            return Err("Each member needs a distinct email.".to_owned());
        }
        seen.push(lowered);
        members.push(TeamMember {
            name: name.to_owned(),
            email: email.to_owned(),
        });
    }

    let transaction_id = transaction_id.trim();
    if event.entry_fee > 0 && transaction_id.is_empty() {
        return Err("Enter the payment reference for the entry fee.".to_owned());
    }

    Ok(TeamRegistration {
        name: team_name.to_owned(),
        members,
        transaction_id: if transaction_id.is_empty() {
            None
        } else {
            Some(transaction_id.to_owned())
        },
    })
}
