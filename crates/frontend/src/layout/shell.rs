use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::header::Header;
use super::sidebar::Sidebar;

/// Dashboard frame: sidebar, header, routed content.
#[component]
pub fn Shell() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <div class="shell">
            <Show when=move || mobile_menu_open.get()>
                <div
                    class="shell__backdrop"
                    on:click=move |_| set_mobile_menu_open.set(false)
                ></div>
            </Show>
            <Sidebar
                open=mobile_menu_open
                on_close=Callback::new(move |_| set_mobile_menu_open.set(false))
            />
            <div class="shell__main">
                <Header on_menu=Callback::new(move |_| set_mobile_menu_open.set(true)) />
                <main class="shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
