use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::use_auth;
use crate::shared::components::loading::Loading;

/// Route wrapper for the freelancer dashboard. Redirects to the login page
/// when there is no session or the session user lacks the freelancer role;
/// shows a placeholder while the stored token is still being validated.
#[component]
pub fn RequireFreelancer(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let state = auth_state.get();
        let redirect = match (&state.token, &state.user) {
            (None, _) => true,
            (Some(_), Some(user)) => !user.is_freelancer(),
            // Still resolving the session; stay put.
            (Some(_), None) => false,
        };
        if redirect {
            navigate("/login", Default::default());
        }
    });

    view! {
        <Show
            when=move || auth_state.get().is_freelancer()
            fallback=|| view! { <Loading /> }
        >
            {children()}
        </Show>
    }
}
