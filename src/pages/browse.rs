//! Public event browsing page, also the landing route.

use leptos::prelude::*;

use crate::components::event_card::EventCard;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let events = LocalResource::new(|| crate::net::api::fetch_events());

    view! {
        <div class="browse-page">
            <header class="browse-page__header">
                <h1>"Events"</h1>
            </header>
            <Suspense fallback=move || view! { <p class="page-loading">"Loading events..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="browse-page__empty">
                                            "No events yet. Check back soon."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="browse-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|event| view! { <EventCard event=event/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="page-error">
                                        {format!("Failed to load events: {err}")}
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
