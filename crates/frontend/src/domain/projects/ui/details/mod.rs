use contracts::domain::project::{CreateProjectDto, ProjectStatus, UpdateProjectDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::pickers::load_client_options;
use crate::domain::projects::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::loading::Loading;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::for_date_input;
use crate::shared::toast::use_toast;

fn parse_budget(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|b| *b > 0.0)
}

fn validate(title: &str, budget: &str, deadline: &str, client_id: &str) -> Option<String> {
    if title.trim().is_empty() {
        return Some("Title is required".to_string());
    }
    if parse_budget(budget).is_none() {
        return Some("Budget must be a positive number".to_string());
    }
    if deadline.trim().is_empty() {
        return Some("Deadline is required".to_string());
    }
    if client_id.is_empty() {
        return Some("Client is required".to_string());
    }
    None
}

fn status_options() -> Vec<(String, String)> {
    ProjectStatus::all()
        .into_iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

fn parse_status(value: &str) -> ProjectStatus {
    ProjectStatus::all()
        .into_iter()
        .find(|s| s.as_str() == value)
        .unwrap_or(ProjectStatus::NotStarted)
}

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let status = RwSignal::new(ProjectStatus::NotStarted.as_str().to_string());
    let client_id = RwSignal::new(String::new());
    let client_options = RwSignal::new(Vec::<(String, String)>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    load_client_options(client_options);

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(message) = validate(&title.get(), &budget.get(), &deadline.get(), &client_id.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let dto = CreateProjectDto {
            title: title.get().trim().to_string(),
            budget: parse_budget(&budget.get()).unwrap_or_default(),
            deadline: deadline.get(),
            status: parse_status(&status.get()),
            client_id: client_id.get(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_project(&dto).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Project);
                    navigate("/projects", Default::default());
                }
                Err(e) => {
                    log::error!("create project failed: {}", e);
                    toast.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--detail">
            <div class="form-card">
                <h2 class="page__title">"Create Project"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Title"</Label>
                    <Input value=title disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <label class="form__label" for="budget">"Budget"</label>
                    <input
                        type="number"
                        id="budget"
                        class="form__input"
                        min="0"
                        step="0.01"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="deadline">"Deadline"</label>
                    <input
                        type="date"
                        id="deadline"
                        class="form__input"
                        prop:value=move || deadline.get()
                        on:input=move |ev| deadline.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <Select
                    label="Status"
                    value=Signal::derive(move || status.get())
                    on_change=Callback::new(move |value| status.set(value))
                    options=Signal::derive(status_options)
                />
                <Select
                    label="Client"
                    value=Signal::derive(move || client_id.get())
                    on_change=Callback::new(move |value| client_id.set(value))
                    options=Signal::derive(move || client_options.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/projects", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Create Project" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EditProjectPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();
    let params = use_params_map();
    let project_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let title = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let status = RwSignal::new(ProjectStatus::NotStarted.as_str().to_string());
    let client_id = RwSignal::new(String::new());
    let client_options = RwSignal::new(Vec::<(String, String)>::new());
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    load_client_options(client_options);

    Effect::new(move |_| {
        let id = project_id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_project(&id).await {
                Ok(project) => {
                    title.set(project.title);
                    budget.set(project.budget.to_string());
                    deadline.set(for_date_input(&project.deadline));
                    status.set(project.status.as_str().to_string());
                    client_id.set(project.client_id);
                    loaded.set(true);
                }
                Err(e) => {
                    log::error!("load project failed: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    });

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(message) = validate(&title.get(), &budget.get(), &deadline.get(), &client_id.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let id = project_id();
        let dto = UpdateProjectDto {
            title: Some(title.get().trim().to_string()),
            budget: parse_budget(&budget.get()),
            deadline: Some(deadline.get()),
            status: Some(parse_status(&status.get())),
            client_id: Some(client_id.get()),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_project(&id, &dto).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Project);
                    navigate("/projects", Default::default());
                }
                Err(e) => {
                    log::error!("update project failed: {}", e);
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
                <h2 class="page__title">"Edit Project"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Title"</Label>
                    <Input value=title disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <label class="form__label" for="budget">"Budget"</label>
                    <input
                        type="number"
                        id="budget"
                        class="form__input"
                        min="0"
                        step="0.01"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="deadline">"Deadline"</label>
                    <input
                        type="date"
                        id="deadline"
                        class="form__input"
                        prop:value=move || deadline.get()
                        on:input=move |ev| deadline.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>
                <Select
                    label="Status"
                    value=Signal::derive(move || status.get())
                    on_change=Callback::new(move |value| status.set(value))
                    options=Signal::derive(status_options)
                />
                <Select
                    label="Client"
                    value=Signal::derive(move || client_id.get())
                    on_change=Callback::new(move |value| client_id.set(value))
                    options=Signal::derive(move || client_options.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/projects", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Update Project" }}
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
    fn test_parse_budget_rejects_non_positive() {
        assert_eq!(parse_budget("1500"), Some(1500.0));
        assert_eq!(parse_budget("0"), None);
        assert_eq!(parse_budget("-5"), None);
        assert_eq!(parse_budget("abc"), None);
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(validate("", "100", "2025-01-01", "c1").is_some());
        assert!(validate("Site", "", "2025-01-01", "c1").is_some());
        assert!(validate("Site", "100", "", "c1").is_some());
        assert!(validate("Site", "100", "2025-01-01", "").is_some());
        assert!(validate("Site", "100", "2025-01-01", "c1").is_none());
    }

    #[test]
    fn test_parse_status_falls_back_to_not_started() {
        assert_eq!(parse_status("COMPLETED"), ProjectStatus::Completed);
        assert_eq!(parse_status("bogus"), ProjectStatus::NotStarted);
    }
}
