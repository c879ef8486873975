use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::cache::InvalidationBus;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Invalidation bus and toast service are provided once for the whole app.
    provide_context(InvalidationBus::new());
    provide_context(ToastService::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <AppRoutes />
                <ToastHost />
            </AuthProvider>
        </ThemeProvider>
    }
}
