use contracts::system::auth::{LoginDto, SessionUser};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Typed session held in application state. The token is read from storage
/// once on startup; role checks go against `user`, never against a decoded
/// token.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_freelancer(&self) -> bool {
        self.user.as_ref().map(|u| u.is_freelancer()).unwrap_or(false)
    }

    /// Token present but session user not resolved yet.
    pub fn is_resolving(&self) -> bool {
        self.token.is_some() && self.user.is_none()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_access_token(),
        user: None,
    });

    // Validate the stored token by resolving the session user once on mount.
    Effect::new(move |_| {
        if auth_state.get_untracked().token.is_none() {
            return;
        }
        spawn_local(async move {
            match api::get_me().await {
                Ok(user) => {
                    set_auth_state.update(|state| state.user = Some(user));
                }
                Err(e) => {
                    log::warn!("stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Perform login: exchange credentials for a token, persist it, resolve the
/// session user and publish both to the auth state.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    dto: LoginDto,
) -> Result<(), String> {
    let tokens = api::login(&dto).await?;
    storage::save_access_token(&tokens.access_token);

    let user = api::get_me().await?;
    set_auth_state.set(AuthState {
        token: Some(tokens.access_token),
        user: Some(user),
    });

    Ok(())
}

/// Perform logout: drop the stored token and clear the session.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
