//! Static contact page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Contact"</h1>
            <p>"Questions about an event? Reach the organizing team directly from the event page."</p>
            <p>
                "Platform support: "
                <a href="mailto:support@eventhub.example">"support@eventhub.example"</a>
            </p>
        </div>
    }
}
