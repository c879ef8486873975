use contracts::domain::interaction::{CreateInteractionDto, InteractionType, UpdateInteractionDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::interactions::api;
use crate::domain::pickers::{load_client_options, load_project_options};
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::loading::Loading;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::date_utils::{datetime_input_to_iso, for_datetime_input};
use crate::shared::toast::use_toast;

fn validate(date: &str, client_id: &str, project_id: &str) -> Option<String> {
    if date.trim().is_empty() {
        return Some("Date is required".to_string());
    }
    if client_id.is_empty() {
        return Some("Client is required".to_string());
    }
    if project_id.is_empty() {
        return Some("Project is required".to_string());
    }
    None
}

fn kind_options() -> Vec<(String, String)> {
    InteractionType::all()
        .into_iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect()
}

fn parse_kind(value: &str) -> InteractionType {
    InteractionType::all()
        .into_iter()
        .find(|k| k.as_str() == value)
        .unwrap_or(InteractionType::Email)
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn CreateInteractionPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();

    let date = RwSignal::new(String::new());
    let kind = RwSignal::new(InteractionType::Email.as_str().to_string());
    let notes = RwSignal::new(String::new());
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
        if let Some(message) = validate(&date.get(), &client_id.get(), &project_id.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let dto = CreateInteractionDto {
            date: datetime_input_to_iso(&date.get()),
            kind: parse_kind(&kind.get()),
            notes: optional(notes.get()),
            client_id: client_id.get(),
            project_id: project_id.get(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_interaction(&dto).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Interaction);
                    navigate("/interactions", Default::default());
                }
                Err(e) => {
                    log::error!("create interaction failed: {}", e);
                    toast.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--detail">
            <div class="form-card">
                <h2 class="page__title">"Log Interaction"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label" for="date">"Date"</label>
                    <input
                        type="datetime-local"
                        id="date"
                        class="form__input"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <Select
                    label="Type"
                    value=Signal::derive(move || kind.get())
                    on_change=Callback::new(move |value| kind.set(value))
                    options=Signal::derive(kind_options)
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
                <Textarea
                    label="Notes"
                    value=notes
                    placeholder="What was discussed..."
                    disabled=Signal::derive(move || saving.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/interactions", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Log Interaction" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EditInteractionPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();
    let params = use_params_map();
    let interaction_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let date = RwSignal::new(String::new());
    let kind = RwSignal::new(InteractionType::Email.as_str().to_string());
    let notes = RwSignal::new(String::new());
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
        let id = interaction_id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_interaction(&id).await {
                Ok(interaction) => {
                    date.set(for_datetime_input(&interaction.date));
                    kind.set(interaction.kind.as_str().to_string());
                    notes.set(interaction.notes.unwrap_or_default());
                    client_id.set(interaction.client_id);
                    project_id.set(interaction.project_id);
                    loaded.set(true);
                }
                Err(e) => {
                    log::error!("load interaction failed: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    });

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(message) = validate(&date.get(), &client_id.get(), &project_id.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let id = interaction_id();
        let dto = UpdateInteractionDto {
            date: Some(datetime_input_to_iso(&date.get())),
            kind: Some(parse_kind(&kind.get())),
            notes: optional(notes.get()),
            client_id: Some(client_id.get()),
            project_id: Some(project_id.get()),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_interaction(&id, &dto).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Interaction);
                    navigate("/interactions", Default::default());
                }
                Err(e) => {
                    log::error!("update interaction failed: {}", e);
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
                <h2 class="page__title">"Update Interaction"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label" for="date">"Date"</label>
                    <input
                        type="datetime-local"
                        id="date"
                        class="form__input"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <Select
                    label="Type"
                    value=Signal::derive(move || kind.get())
                    on_change=Callback::new(move |value| kind.set(value))
                    options=Signal::derive(kind_options)
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
                <Textarea
                    label="Notes"
                    value=notes
                    disabled=Signal::derive(move || saving.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/interactions", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Update Interaction" }}
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
    fn test_validate_requires_date_client_project() {
        assert!(validate("", "c1", "p1").is_some());
        assert!(validate("2024-03-15T10:00", "", "p1").is_some());
        assert!(validate("2024-03-15T10:00", "c1", "").is_some());
        assert!(validate("2024-03-15T10:00", "c1", "p1").is_none());
    }

    #[test]
    fn test_parse_kind_falls_back_to_email() {
        assert_eq!(parse_kind("MEET"), InteractionType::Meet);
        assert_eq!(parse_kind("bogus"), InteractionType::Email);
    }
}
