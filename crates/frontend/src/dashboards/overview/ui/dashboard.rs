use contracts::domain::project::ProjectStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::overview::api;
use crate::domain::projects::api as projects_api;
use crate::domain::projects::ui::list::{ProjectListToolbar, ProjectsTable};
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::confirm::{ConfirmDialog, ConfirmFlow};
use crate::shared::components::empty::Empty;
use crate::shared::components::loading::Loading;
use crate::shared::components::pagination::Pagination;
use crate::shared::components::stat_card::StatCard;
use crate::shared::list_controller::{ListConfig, ListController, RenderState};
use crate::shared::toast::use_toast;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();

    let total_clients = RwSignal::new(None::<usize>);
    let total_projects = RwSignal::new(None::<usize>);
    let due_soon = RwSignal::new(None::<usize>);

    Effect::new(move |_| {
        bus.version(EntityTag::Freelancer);
        spawn_local(async move {
            match api::fetch_total_clients().await {
                Ok(count) => total_clients.set(Some(count)),
                Err(e) => log::error!("fetch client total failed: {}", e),
            }
        });
        spawn_local(async move {
            match api::fetch_total_projects().await {
                Ok(count) => total_projects.set(Some(count)),
                Err(e) => log::error!("fetch project total failed: {}", e),
            }
        });
        spawn_local(async move {
            match api::fetch_due_soon_reminders().await {
                Ok(reminders) => due_soon.set(Some(reminders.len())),
                Err(e) => log::error!("fetch due reminders failed: {}", e),
            }
        });
    });

    let controller = ListController::new(
        EntityTag::Project,
        ListConfig::default(),
        projects_api::fetch_projects,
    );
    let pending_delete = RwSignal::new(ConfirmFlow::default());

    let perform_delete = move |id: String| {
        spawn_local(async move {
            match projects_api::delete_project(&id).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Project);
                }
                Err(e) => {
                    log::error!("delete project failed: {}", e);
                    toast.error(e);
                }
            }
        });
    };

    let change_status = move |(id, status): (String, ProjectStatus)| {
        spawn_local(async move {
            match projects_api::update_project_status(&id, status).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Project);
                }
                Err(e) => {
                    log::error!("update project status failed: {}", e);
                    toast.error(e);
                }
            }
        });
    };

    view! {
        <div class="page page--dashboard">
            <div class="stat-grid">
                <StatCard
                    label="Total Clients"
                    icon_name="users"
                    value=Signal::derive(move || total_clients.get())
                />
                <StatCard
                    label="Total Projects"
                    icon_name="briefcase"
                    value=Signal::derive(move || total_projects.get())
                />
                <StatCard
                    label="Due soon reminders"
                    icon_name="bell"
                    value=Signal::derive(move || due_soon.get())
                />
            </div>

            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"My Projects"</h2>
                </div>
                <ProjectListToolbar controller=controller />
            </div>

            {move || match controller.render_state() {
                RenderState::Loading => view! { <Loading /> }.into_any(),
                RenderState::Failed(error) => {
                    view! { <div class="alert alert--error">{error}</div> }.into_any()
                }
                RenderState::Empty => view! {
                    <Empty
                        title="No Project Found"
                        description="No project found. Create project to get started."
                        action_text="Create Project"
                        action_path="/projects/new"
                    />
                }
                .into_any(),
                RenderState::Populated => view! {
                    {move || controller
                        .stale_error()
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <ProjectsTable
                        projects=Signal::derive(move || controller.items())
                        on_delete=Callback::new(move |id| {
                            pending_delete.update(|f| f.request(id))
                        })
                        on_status_change=Callback::new(change_status)
                    />
                    <Pagination
                        page=Signal::derive(move || controller.page())
                        page_size=Signal::derive(move || controller.page_size())
                        total=Signal::derive(move || controller.total())
                        on_change=Callback::new(move |(page, size)| controller.go_to(page, size))
                    />
                }
                .into_any(),
            }}

            <ConfirmDialog
                flow=pending_delete
                message="This will permanently remove the project."
                on_confirm=Callback::new(perform_delete)
            />
        </div>
    }
}
