//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"About EventHub"</h1>
            <p>
                "EventHub is where organizers publish hackathons and tech events, "
                "and students find them, form teams, and register."
            </p>
            <p>
                "Managers create and run events; students browse, register teams, "
                "and track their payment status in one place."
            </p>
        </div>
    }
}
