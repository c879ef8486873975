use chrono::{NaiveDate, Utc};
use contracts::domain::reminder::Reminder;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::reminders::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::confirm::{ConfirmDialog, ConfirmFlow};
use crate::shared::components::empty::Empty;
use crate::shared::components::loading::Loading;
use crate::shared::components::pagination::Pagination;
use crate::shared::date_utils::{day_of, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, RenderState};
use crate::shared::toast::use_toast;

/// Due-state label and badge class for a reminder date, relative to `today`.
fn reminder_status(date: &str, today: NaiveDate) -> (&'static str, &'static str) {
    match day_of(date) {
        Some(day) if day < today => ("Overdue", "badge badge--error"),
        Some(day) if day == today => ("Today", "badge badge--warning"),
        Some(_) => ("Upcoming", "badge badge--success"),
        None => ("Unknown", "badge badge--neutral"),
    }
}

#[component]
pub fn RemindersListPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let controller = ListController::new(
        EntityTag::Reminder,
        ListConfig::default(),
        api::fetch_reminders,
    );
    let pending_delete = RwSignal::new(ConfirmFlow::default());

    let perform_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_reminder(&id).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Reminder);
                }
                Err(e) => {
                    log::error!("delete reminder failed: {}", e);
                    toast.error(e);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Manage Reminders"</h2>
                    <Badge>{move || controller.total().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <div class="search">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Search reminders..."
                            prop:value=move || controller.search_text()
                            on:input=move |ev| controller.search(event_target_value(&ev))
                        />
                        <Show when=move || !controller.search_text().is_empty()>
                            <button
                                class="search__clear"
                                on:click=move |_| controller.search(String::new())
                            >
                                {icon("x")}
                            </button>
                        </Show>
                    </div>
                    <A href="/reminders/new" attr:class="button button--primary">
                        {icon("plus")}
                        " Add Reminder"
                    </A>
                </div>
            </div>

            {move || match controller.render_state() {
                RenderState::Loading => view! { <Loading /> }.into_any(),
                RenderState::Failed(error) => {
                    view! { <div class="alert alert--error">{error}</div> }.into_any()
                }
                RenderState::Empty => view! {
                    <Empty
                        title="No Reminder Found"
                        description="No reminder found. Create one so nothing slips."
                        action_text="Create Reminder"
                        action_path="/reminders/new"
                    />
                }
                .into_any(),
                RenderState::Populated => view! {
                    {move || controller
                        .stale_error()
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <RemindersTable
                        reminders=Signal::derive(move || controller.items())
                        on_delete=Callback::new(move |id| {
                            pending_delete.update(|f| f.request(id))
                        })
                    />
                    <Pagination
                        page=Signal::derive(move || controller.page())
                        page_size=Signal::derive(move || controller.page_size())
                        total=Signal::derive(move || controller.total())
                        on_change=Callback::new(move |(page, size)| controller.go_to(page, size))
                    />
                }
                .into_any(),
            }}

            <ConfirmDialog
                flow=pending_delete
                message="This will permanently remove the reminder."
                on_confirm=Callback::new(perform_delete)
            />
        </div>
    }
}

#[component]
fn RemindersTable(
    #[prop(into)] reminders: Signal<Vec<Reminder>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Message"</th>
                        <th class="table__header-cell">"Date"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell">"Client"</th>
                        <th class="table__header-cell">"Project"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || reminders.get()
                        key=|reminder| reminder.id.clone()
                        children=move |reminder| {
                            let edit_href = format!("/reminders/{}", reminder.id);
                            let delete_id = reminder.id.clone();
                            let client_name = reminder
                                .client
                                .as_ref()
                                .map(|c| c.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let project_title = reminder
                                .project
                                .as_ref()
                                .map(|p| p.title.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let (status_label, status_badge) =
                                reminder_status(&reminder.date, Utc::now().date_naive());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--truncate">
                                        {reminder.message.clone()}
                                    </td>
                                    <td class="table__cell">{format_datetime(&reminder.date)}</td>
                                    <td class="table__cell">
                                        <span class=status_badge>{status_label}</span>
                                    </td>
                                    <td class="table__cell">{client_name}</td>
                                    <td class="table__cell">{project_title}</td>
                                    <td class="table__cell table__cell--actions">
                                        <A href=edit_href attr:class="table__action" attr:title="Edit">
                                            {icon("edit")}
                                        </A>
                                        <button
                                            class="table__action table__action--danger"
                                            title="Delete"
                                            on:click=move |_| on_delete.run(delete_id.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_status_buckets() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(reminder_status("2024-03-14", today).0, "Overdue");
        assert_eq!(reminder_status("2024-03-15T09:00:00Z", today).0, "Today");
        assert_eq!(reminder_status("2024-03-20", today).0, "Upcoming");
        assert_eq!(reminder_status("garbage", today).0, "Unknown");
    }
}
