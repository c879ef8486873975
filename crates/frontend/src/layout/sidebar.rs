use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Navigation entries shared by the sidebar and the header title.
pub const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "Dashboard", "home"),
    ("/clients", "Clients", "users"),
    ("/projects", "Projects", "briefcase"),
    ("/interactions", "Interactions", "message"),
    ("/reminders", "Reminders", "bell"),
];

/// Whether a nav entry matches the current path, including its subroutes
/// (`/clients/new` still highlights "Clients").
pub fn is_active(current: &str, path: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current == path || current.starts_with(&format!("{}/", path))
    }
}

#[component]
pub fn Sidebar(
    /// Whether the sidebar is shown on small screens
    #[prop(into)]
    open: Signal<bool>,
    /// Close request from the mobile backdrop / close button
    on_close: Callback<()>,
) -> impl IntoView {
    let location = use_location();
    let (auth_state, _) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };
    let user_email = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    };

    view! {
        <aside class="sidebar" class:sidebar--open=move || open.get()>
            <div class="sidebar__brand">
                <h1>"FreelanceFlow"</h1>
                <button
                    class="sidebar__close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {NAV_ITEMS.iter().map(|&(path, label, icon_name)| {
                        view! {
                            <li>
                                <A
                                    href=path
                                    attr:class=move || {
                                        let current = location.pathname.get();
                                        if is_active(&current, path) {
                                            "sidebar__link sidebar__link--active"
                                        } else {
                                            "sidebar__link"
                                        }
                                    }
                                    on:click=move |_| on_close.run(())
                                >
                                    <span class="sidebar__link-icon">{icon(icon_name)}</span>
                                    {label}
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
            <div class="sidebar__footer">
                <p class="sidebar__user-name">{user_name}</p>
                <p class="sidebar__user-email">{user_email}</p>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/clients", "/"));
    }

    #[test]
    fn test_section_matches_subroutes() {
        assert!(is_active("/clients", "/clients"));
        assert!(is_active("/clients/new", "/clients"));
        assert!(is_active("/clients/42", "/clients"));
        assert!(!is_active("/clientsabc", "/clients"));
        assert!(!is_active("/projects", "/clients"));
    }
}
