use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

/// Placeholder for a collection with nothing to show, with an optional
/// call-to-action linking to the create page.
#[component]
pub fn Empty(
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] description: Option<String>,
    #[prop(into, optional)] action_text: Option<String>,
    #[prop(into, optional)] action_path: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "No Data Found".to_string());
    let description = description.unwrap_or_else(|| {
        "There are no records to display. You might want to add some data.".to_string()
    });
    let action_text = action_text.unwrap_or_else(|| "Add New".to_string());

    view! {
        <div class="empty">
            <div class="empty__icon">{icon("database")}</div>
            <h3 class="empty__title">{title}</h3>
            <p class="empty__description">{description}</p>
            {action_path.map(|path| {
                view! {
                    <A href=path attr:class="button button--primary">
                        {action_text}
                    </A>
                }
            })}
        </div>
    }
}
