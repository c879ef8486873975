use contracts::domain::project::{Project, ProjectStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::projects::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::confirm::{ConfirmDialog, ConfirmFlow};
use crate::shared::components::empty::Empty;
use crate::shared::components::loading::Loading;
use crate::shared::components::pagination::Pagination;
use crate::shared::date_utils::{format_date, is_past};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, RenderState};
use crate::shared::toast::use_toast;

pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, frac)
    }
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::NotStarted => "badge badge--neutral",
        ProjectStatus::InProgress => "badge badge--info",
        ProjectStatus::Completed => "badge badge--success",
        ProjectStatus::OnHold => "badge badge--warning",
    }
}

/// Search box, status filter and a "Create Project" link; shared by the
/// projects page and the dashboard.
#[component]
pub fn ProjectListToolbar(
    controller: ListController<Project>,
    #[prop(optional)] show_create: bool,
) -> impl IntoView {
    view! {
        <div class="page__header-right">
            <div class="search">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Search projects..."
                    prop:value=move || controller.search_text()
                    on:input=move |ev| controller.search(event_target_value(&ev))
                />
                <Show when=move || !controller.search_text().is_empty()>
                    <button
                        class="search__clear"
                        on:click=move |_| controller.search(String::new())
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>
            <select
                class="form__select"
                prop:value=move || controller.status_filter()
                on:change=move |ev| controller.filter_status(event_target_value(&ev))
            >
                <option value="">"All"</option>
                {ProjectStatus::all().into_iter().map(|status| {
                    view! { <option value=status.as_str()>{status.label()}</option> }
                }).collect_view()}
            </select>
            <Show when=move || show_create>
                <A href="/projects/new" attr:class="button button--primary">
                    {icon("plus")}
                    " Create Project"
                </A>
            </Show>
        </div>
    }
}

#[component]
pub fn ProjectsListPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let controller = ListController::new(
        EntityTag::Project,
        ListConfig::default(),
        api::fetch_projects,
    );
    let pending_delete = RwSignal::new(ConfirmFlow::default());

    let perform_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_project(&id).await {
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
            match api::update_project_status(&id, status).await {
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
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Manage Projects"</h2>
                    <Badge>{move || controller.total().to_string()}</Badge>
                </div>
                <ProjectListToolbar controller=controller show_create=true />
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

#[component]
pub fn ProjectsTable(
    #[prop(into)] projects: Signal<Vec<Project>>,
    on_delete: Callback<String>,
    /// When present, the status cell becomes an inline selector.
    #[prop(optional)]
    on_status_change: Option<Callback<(String, ProjectStatus)>>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Title"</th>
                        <th class="table__header-cell">"Client"</th>
                        <th class="table__header-cell">"Budget"</th>
                        <th class="table__header-cell">"Deadline"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || projects.get()
                        key=|project| project.id.clone()
                        children=move |project| {
                            let edit_href = format!("/projects/{}", project.id);
                            let delete_id = project.id.clone();
                            let status_id = project.id.clone();
                            let client_name = project
                                .client
                                .as_ref()
                                .map(|c| c.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let overdue = is_past(&project.deadline)
                                && project.status != ProjectStatus::Completed;
                            let status = project.status;
                            let status_cell = match on_status_change {
                                Some(callback) => view! {
                                    <select
                                        class="form__select form__select--inline"
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            if let Some(next) = ProjectStatus::all()
                                                .into_iter()
                                                .find(|s| s.as_str() == value)
                                            {
                                                callback.run((status_id.clone(), next));
                                            }
                                        }
                                    >
                                        {ProjectStatus::all().into_iter().map(|option| {
                                            view! {
                                                <option
                                                    value=option.as_str()
                                                    selected=option == status
                                                >
                                                    {option.label()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                }
                                .into_any(),
                                None => view! {
                                    <span class=status_class(status)>{status.label()}</span>
                                }
                                .into_any(),
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{project.title.clone()}</td>
                                    <td class="table__cell">{client_name}</td>
                                    <td class="table__cell">{format_currency(project.budget)}</td>
                                    <td
                                        class="table__cell"
                                        class:table__cell--overdue=overdue
                                    >
                                        {format_date(&project.deadline)}
                                    </td>
                                    <td class="table__cell">{status_cell}</td>
                                    <td class="table__cell table__cell--actions">
                                        <A href=edit_href attr:class="table__action" attr:title="Edit">
                                            {icon("edit")}
                                        </A>
                                        <button
                                            class="table__action table__action--danger"
                                            title="Delete"
                                            on:click=move |_| on_delete.run(delete_id.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(12_500.0), "$12,500");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn test_format_currency_keeps_cents() {
        assert_eq!(format_currency(99.5), "$99.50");
        assert_eq!(format_currency(-1200.25), "-$1,200.25");
    }
}
