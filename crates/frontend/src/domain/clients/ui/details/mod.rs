use contracts::domain::client::{CreateClientDto, UpdateClientDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::clients::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::loading::Loading;
use crate::shared::components::ui::Textarea;
use crate::shared::toast::use_toast;

fn validate(name: &str, email: &str, phone: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name is required".to_string());
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Some("A valid email is required".to_string());
    }
    if phone.trim().is_empty() {
        return Some("Phone number is required".to_string());
    }
    None
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
pub fn CreateClientPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(message) = validate(&name.get(), &email.get(), &phone.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let dto = CreateClientDto {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            phone_number: phone.get().trim().to_string(),
            company: optional(company.get()),
            notes: optional(notes.get()),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_client(&dto).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Client);
                    navigate("/clients", Default::default());
                }
                Err(e) => {
                    log::error!("create client failed: {}", e);
                    toast.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--detail">
            <div class="form-card">
                <h2 class="page__title">"Add Client"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Name"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>
                <div class="form__group">
                    <Label>"Phone number"</Label>
                    <Input value=phone disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Company"</Label>
                    <Input value=company disabled=Signal::derive(move || saving.get()) />
                </div>
                <Textarea
                    label="Notes"
                    value=notes
                    placeholder="Optional notes about this client..."
                    disabled=Signal::derive(move || saving.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/clients", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Client" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EditClientPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let navigate = use_navigate();
    let params = use_params_map();
    let client_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let id = client_id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_client(&id).await {
                Ok(client) => {
                    name.set(client.name);
                    email.set(client.email);
                    phone.set(client.phone_number);
                    company.set(client.company.unwrap_or_default());
                    notes.set(client.notes.unwrap_or_default());
                    loaded.set(true);
                }
                Err(e) => {
                    log::error!("load client failed: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    });

    let navigate_cancel = navigate.clone();

    let on_save = move |_| {
        if let Some(message) = validate(&name.get(), &email.get(), &phone.get()) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let id = client_id();
        let dto = UpdateClientDto {
            name: Some(name.get().trim().to_string()),
            email: Some(email.get().trim().to_string()),
            phone_number: Some(phone.get().trim().to_string()),
            company: optional(company.get()),
            notes: optional(notes.get()),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::update_client(&id, &dto).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Client);
                    navigate("/clients", Default::default());
                }
                Err(e) => {
                    log::error!("update client failed: {}", e);
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
                <h2 class="page__title">"Edit Client"</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Name"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                </div>
                <div class="form__group">
                    <Label>"Phone number"</Label>
                    <Input value=phone disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Company"</Label>
                    <Input value=company disabled=Signal::derive(move || saving.get()) />
                </div>
                <Textarea
                    label="Notes"
                    value=notes
                    disabled=Signal::derive(move || saving.get())
                />

                <div class="form-card__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigate_cancel("/clients", Default::default())
                        disabled=move || saving.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Update Client" }}
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
    fn test_validate_requires_name_email_phone() {
        assert!(validate("", "a@b.c", "123").is_some());
        assert!(validate("Acme", "not-an-email", "123").is_some());
        assert!(validate("Acme", "a@b.c", " ").is_some());
        assert!(validate("Acme", "a@b.c", "123").is_none());
    }

    #[test]
    fn test_optional_drops_blank_values() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" Initech ".to_string()), Some("Initech".to_string()));
    }
}
