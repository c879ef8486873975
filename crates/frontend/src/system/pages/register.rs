use contracts::system::auth::RegisterDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::use_toast;
use crate::system::auth::api;

fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name is required".to_string());
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Some("A valid email is required".to_string());
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Some(error) = validate(&name.get(), &email.get(), &password.get(), &confirm.get()) {
            set_error_message.set(Some(error));
            return;
        }

        let dto = RegisterDto {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&dto).await {
                Ok(message) => {
                    toast.success(message);
                    set_is_loading.set(false);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"FreelanceFlow"</h1>
                <h2>"Create your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            class="form__input"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="confirm">"Confirm password"</label>
                        <input
                            type="password"
                            id="confirm"
                            class="form__input"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-box__footer">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(validate("", "a@b.c", "secret1", "secret1").is_some());
    }

    #[test]
    fn test_validate_rejects_password_mismatch() {
        assert!(validate("Jo", "a@b.c", "secret1", "secret2").is_some());
    }

    #[test]
    fn test_validate_accepts_good_input() {
        assert!(validate("Jo", "a@b.c", "secret1", "secret1").is_none());
    }
}
