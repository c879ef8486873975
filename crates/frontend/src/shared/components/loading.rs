use leptos::prelude::*;

/// Animated placeholder shown while a fetch is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__dot"></div>
            <div class="loading__dot loading__dot--second"></div>
            <div class="loading__dot loading__dot--third"></div>
        </div>
    }
}
