use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard counter tile.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,

    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,

    /// Counter value (None = still loading)
    #[prop(into)]
    value: Signal<Option<usize>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <h2 class="stat-card__label">{label}</h2>
            <div class="stat-card__body">
                <div class="stat-card__icon">{icon(&icon_name)}</div>
                <p class="stat-card__value">{formatted}</p>
            </div>
        </div>
    }
}
