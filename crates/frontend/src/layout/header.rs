use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use super::sidebar::{is_active, NAV_ITEMS};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_logout, use_auth};

/// Header title for the current path; falls back to the dashboard label.
pub fn page_title(path: &str) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|(item_path, _, _)| is_active(path, item_path))
        .map(|&(_, label, _)| label)
        .unwrap_or("Dashboard")
}

#[component]
pub fn Header(
    /// Opens the sidebar on small screens
    on_menu: Callback<()>,
) -> impl IntoView {
    let location = use_location();
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        do_logout(set_auth_state);
        navigate("/login", Default::default());
    };

    view! {
        <header class="header">
            <div class="header__left">
                <button
                    class="header__icon-btn header__menu-btn"
                    on:click=move |_| on_menu.run(())
                >
                    {icon("menu")}
                </button>
                <h2 class="header__title">
                    {move || page_title(&location.pathname.get())}
                </h2>
            </div>
            <div class="header__right">
                <ThemeToggle />
                <A href="/reminders" attr:class="header__icon-btn">
                    {icon("bell")}
                </A>
                <button
                    class="header__icon-btn"
                    title="Sign out"
                    on:click=on_logout
                >
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_by_section() {
        assert_eq!(page_title("/"), "Dashboard");
        assert_eq!(page_title("/clients"), "Clients");
        assert_eq!(page_title("/clients/new"), "Clients");
        assert_eq!(page_title("/projects/42"), "Projects");
        assert_eq!(page_title("/unknown"), "Dashboard");
    }

    // The root entry must not swallow every path.
    #[test]
    fn test_root_entry_only_matches_root() {
        assert_eq!(page_title("/reminders"), "Reminders");
    }
}
