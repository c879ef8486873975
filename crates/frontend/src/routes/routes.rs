use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::ui::dashboard::OverviewDashboard;
use crate::domain::clients::ui::details::{CreateClientPage, EditClientPage};
use crate::domain::clients::ui::list::ClientsListPage;
use crate::domain::interactions::ui::details::{CreateInteractionPage, EditInteractionPage};
use crate::domain::interactions::ui::list::InteractionsListPage;
use crate::domain::projects::ui::details::{CreateProjectPage, EditProjectPage};
use crate::domain::projects::ui::list::ProjectsListPage;
use crate::domain::reminders::ui::details::{CreateReminderPage, EditReminderPage};
use crate::domain::reminders::ui::list::RemindersListPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireFreelancer;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;

#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireFreelancer>
            <Shell />
        </RequireFreelancer>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <ParentRoute path=path!("/") view=ProtectedShell>
                    <Route path=path!("") view=OverviewDashboard />

                    <Route path=path!("clients") view=ClientsListPage />
                    <Route path=path!("clients/new") view=CreateClientPage />
                    <Route path=path!("clients/:id") view=EditClientPage />

                    <Route path=path!("projects") view=ProjectsListPage />
                    <Route path=path!("projects/new") view=CreateProjectPage />
                    <Route path=path!("projects/:id") view=EditProjectPage />

                    <Route path=path!("interactions") view=InteractionsListPage />
                    <Route path=path!("interactions/new") view=CreateInteractionPage />
                    <Route path=path!("interactions/:id") view=EditInteractionPage />

                    <Route path=path!("reminders") view=RemindersListPage />
                    <Route path=path!("reminders/new") view=CreateReminderPage />
                    <Route path=path!("reminders/:id") view=EditReminderPage />
                </ParentRoute>

                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
            </Routes>
        </Router>
    }
}
