use contracts::domain::reminder::{CreateReminderDto, UpdateReminderDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::pickers::{load_client_options, load_project_options};
use crate::domain::reminders::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::loading::Loading;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::date_utils::{datetime_input_to_iso, for_datetime_input};
use crate::shared::toast::use_toast;

fn validate(date: &str, message: &str, client_id: &str, project_id: &str) -> Option<String> {
    if date.trim().is_empty() {
        return Some("Date is required".to_string());
    }
    if message.trim().is_empty() {
        return Some("Message is required".to_string());
    }
    if client_id.is_empty() {
        return Some("Client is required".to_string());
    }
    if project_id.is_empty() {
        return Some("Project is required".to_string());
    }
    None
}

#[component]
pub fn CreateReminderPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();

    let date = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let project_id = RwSignal::new(String::new());
    let client_options = RwSignal::new(Vec::<(String, String)>::new());
    let project_options = RwSignal::new(Vec::<(String, String)>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    load_client_options(client_options);
    load_project_options(project_options);

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(msg) = validate(&date.get(), &message.get(), &client_id.get(), &project_id.get()) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let dto = CreateReminderDto {
            date: datetime_input_to_iso(&date.get()),
            message: message.get().trim().to_string(),
            client_id: client_id.get(),
            project_id: project_id.get(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_reminder(&dto).await {
                Ok(msg) => {
                    toast.success(msg);
                    bus.invalidate(EntityTag::Reminder);
                    navigate("/reminders", Default::default());
                }
                Err(e) => {
                    log::error!("create reminder failed: {}", e);
                    toast.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--detail">
            <div class="form-card">
                <h2 class="page__title">"Create Reminder"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label" for="date">"Remind me on"</label>
                    <input
                        type="datetime-local"
                        id="date"
                        class="form__input"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <Textarea
                    label="Message"
                    value=message
                    placeholder="What should we remind you about?"
                    disabled=Signal::derive(move || saving.get())
                />
                <Select
                    label="Client"
                    value=Signal::derive(move || client_id.get())
                    on_change=Callback::new(move |value| client_id.set(value))
                    options=Signal::derive(move || client_options.get())
                />
                <Select
                    label="Project"
                    value=Signal::derive(move || project_id.get())
                    on_change=Callback::new(move |value| project_id.set(value))
                    options=Signal::derive(move || project_options.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/reminders", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Create Reminder" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EditReminderPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();
    let params = use_params_map();
    let reminder_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let date = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let client_id = RwSignal::new(String::new());
    let project_id = RwSignal::new(String::new());
    let client_options = RwSignal::new(Vec::<(String, String)>::new());
    let project_options = RwSignal::new(Vec::<(String, String)>::new());
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    load_client_options(client_options);
    load_project_options(project_options);

    Effect::new(move |_| {
        let id = reminder_id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_reminder(&id).await {
                Ok(reminder) => {
                    date.set(for_datetime_input(&reminder.date));
                    message.set(reminder.message);
                    client_id.set(reminder.client_id);
                    project_id.set(reminder.project_id);
                    loaded.set(true);
                }
                Err(e) => {
                    log::error!("load reminder failed: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    });

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(msg) = validate(&date.get(), &message.get(), &client_id.get(), &project_id.get()) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let id = reminder_id();
        let dto = UpdateReminderDto {
            date: Some(datetime_input_to_iso(&date.get())),
            message: Some(message.get().trim().to_string()),
            client_id: Some(client_id.get()),
            project_id: Some(project_id.get()),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_reminder(&id, &dto).await {
                Ok(msg) => {
                    toast.success(msg);
                    bus.invalidate(EntityTag::Reminder);
                    navigate("/reminders", Default::default());
                }
                Err(e) => {
                    log::error!("update reminder failed: {}", e);
                    toast.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--detail">
            {move || load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !loaded.get() && load_error.get().is_none()>
                <Loading />
            </Show>

            <div
                class="form-card"
                style:display=move || if loaded.get() { "" } else { "none" }
            >
                <h2 class="page__title">"Update Reminder"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label" for="date">"Remind me on"</label>
                    <input
                        type="datetime-local"
                        id="date"
                        class="form__input"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <Textarea
                    label="Message"
                    value=message
                    disabled=Signal::derive(move || saving.get())
                />
                <Select
                    label="Client"
                    value=Signal::derive(move || client_id.get())
                    on_change=Callback::new(move |value| client_id.set(value))
                    options=Signal::derive(move || client_options.get())
                />
                <Select
                    label="Project"
                    value=Signal::derive(move || project_id.get())
                    on_change=Callback::new(move |value| project_id.set(value))
                    options=Signal::derive(move || project_options.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/reminders", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Update Reminder" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_all_fields() {
        assert!(validate("", "call Bob", "c1", "p1").is_some());
        assert!(validate("2024-03-15T10:00", "", "c1", "p1").is_some());
        assert!(validate("2024-03-15T10:00", "call Bob", "", "p1").is_some());
        assert!(validate("2024-03-15T10:00", "call Bob", "c1", "").is_some());
        assert!(validate("2024-03-15T10:00", "call Bob", "c1", "p1").is_none());
    }
}
