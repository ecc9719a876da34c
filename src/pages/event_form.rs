//! Event create/edit form for managers.
//!
//! One component serves both `/manager/events/new` and
//! `/manager/events/:id/edit`; edit mode prefills the fields once the
//! existing event loads, then submits a PUT instead of a POST.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::net::types::EventDraft;
use crate::state::session::SessionState;

/// Raw field values exactly as the inputs hold them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct EventFormFields {
    title: String,
    description: String,
    venue: String,
    start_date: String,
    end_date: String,
    registration_deadline: String,
    entry_fee: String,
    min_team_size: String,
    max_team_size: String,
}

#[component]
pub fn EventFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let venue = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let entry_fee = RwSignal::new("0".to_owned());
    let min_size = RwSignal::new("1".to_owned());
    let max_size = RwSignal::new("4".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let editing = move || params.with(|p| p.get("id"));

    let existing = LocalResource::new(move || {
        let id = params.with(|p| p.get("id"));
        async move {
            match id {
                Some(id) => crate::net::api::fetch_event(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    // Prefill once when the existing event arrives; later edits must not be
    // clobbered by a re-run.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        if prefilled.get_untracked() {
            return;
        }
        if let Some(Ok(Some(event))) = existing.get() {
            title.set(event.title);
            description.set(event.description);
            venue.set(event.venue);
            start_date.set(event.start_date);
            end_date.set(event.end_date);
            deadline.set(event.registration_deadline.unwrap_or_default());
            entry_fee.set(event.entry_fee.to_string());
            min_size.set(event.min_team_size.to_string());
            max_size.set(event.max_team_size.to_string());
            prefilled.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = EventFormFields {
            title: title.get(),
            description: description.get(),
            venue: venue.get(),
            start_date: start_date.get(),
            end_date: end_date.get(),
            registration_deadline: deadline.get(),
            entry_fee: entry_fee.get(),
            min_team_size: min_size.get(),
            max_team_size: max_size.get(),
        };
        let draft = match validate_event_fields(&fields) {
            Ok(draft) => draft,
            Err(msg) => {
                info.set(msg);
                return;
            }
        };
        busy.set(true);
        info.set("Saving event...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let event_id = editing();
            let token = session.with(|s| s.token.clone());
            leptos::task::spawn_local(async move {
                let Some(token) = token else {
                    busy.set(false);
                    return;
                };
                let result = match &event_id {
                    Some(id) => crate::net::api::update_event(&token, id, &draft).await,
                    None => crate::net::api::create_event(&token, &draft).await,
                };
                match result {
                    Ok(_event) => navigate("/manager/events", NavigateOptions::default()),
                    Err(err) => {
                        crate::state::session::note_api_error(session, &err);
                        info.set(format!("Saving failed: {err}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, session);
        }
    };

    view! {
        <div class="event-form-page">
            <header class="event-form-page__header">
                <h1>{move || if editing().is_some() { "Edit Event" } else { "Create Event" }}</h1>
            </header>
            <form class="event-form" on:submit=on_submit>
                <label class="event-form__label">
                    "Title"
                    <input
                        class="event-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="event-form__label">
                    "Venue"
                    <input
                        class="event-form__input"
                        type="text"
                        prop:value=move || venue.get()
                        on:input=move |ev| venue.set(event_target_value(&ev))
                    />
                </label>
                <div class="event-form__row">
                    <label class="event-form__label">
                        "Start date"
                        <input
                            class="event-form__input"
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="event-form__label">
                        "End date"
                        <input
                            class="event-form__input"
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="event-form__label">
                        "Registration deadline"
                        <input
                            class="event-form__input"
                            type="date"
                            prop:value=move || deadline.get()
                            on:input=move |ev| deadline.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="event-form__row">
                    <label class="event-form__label">
                        "Entry fee"
                        <input
                            class="event-form__input"
                            type="number"
                            min="0"
                            prop:value=move || entry_fee.get()
                            on:input=move |ev| entry_fee.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="event-form__label">
                        "Min team size"
                        <input
                            class="event-form__input"
                            type="number"
                            min="1"
                            prop:value=move || min_size.get()
                            on:input=move |ev| min_size.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="event-form__label">
                        "Max team size"
                        <input
                            class="event-form__input"
                            type="number"
                            min="1"
                            prop:value=move || max_size.get()
                            on:input=move |ev| max_size.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="event-form__label">
                    "Description"
                    <textarea
                        class="event-form__textarea"
                        placeholder="Markdown supported"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if editing().is_some() { "Save Changes" } else { "Publish Event" }}
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="event-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}

fn validate_event_fields(fields: &EventFormFields) -> Result<EventDraft, String> {
    let title = fields.title.trim();
    let venue = fields.venue.trim();
    let description = fields.description.trim();
    if title.is_empty() {
        return Err("Enter an event title.".to_owned());
    }
    if venue.is_empty() {
        return Err("Enter a venue.".to_owned());
    }
    if description.is_empty() {
        return Err("Enter a description.".to_owned());
    }

    let start_date = fields.start_date.trim();
    let end_date = fields.end_date.trim();
    if start_date.is_empty() || end_date.is_empty() {
        return Err("Enter start and end dates.".to_owned());
    }
    // ISO dates compare correctly as strings.
    if end_date < start_date {
        return Err("End date must not be before the start date.".to_owned());
    }
    let deadline = fields.registration_deadline.trim();
    if !deadline.is_empty() && deadline > start_date {
        return Err("Registration deadline must not be after the event starts.".to_owned());
    }

    let entry_fee = if fields.entry_fee.trim().is_empty() {
        0
    } else {
        fields
            .entry_fee
            .trim()
            .parse::<u32>()
            .map_err(|_| "Entry fee must be a whole number.".to_owned())?
    };

    let min_team_size = parse_team_size(&fields.min_team_size)?;
    let max_team_size = parse_team_size(&fields.max_team_size)?;
    if min_team_size > max_team_size {
        return Err("Minimum team size cannot exceed the maximum.".to_owned());
    }

    Ok(EventDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        venue: venue.to_owned(),
        start_date: start_date.to_owned(),
        end_date: end_date.to_owned(),
        registration_deadline: if deadline.is_empty() {
            None
        } else {
            Some(deadline.to_owned())
        },
        entry_fee,
        min_team_size,
        max_team_size,
    })
}

fn parse_team_size(raw: &str) -> Result<u32, String> {
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| "Team sizes must be whole numbers.".to_owned())?;
    if size == 0 {
        return Err("Team sizes must be at least 1.".to_owned());
    }
    Ok(size)
}
