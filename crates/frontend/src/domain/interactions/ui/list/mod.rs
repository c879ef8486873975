use contracts::domain::interaction::{Interaction, InteractionType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::interactions::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::confirm::{ConfirmDialog, ConfirmFlow};
use crate::shared::components::empty::Empty;
use crate::shared::components::loading::Loading;
use crate::shared::components::pagination::Pagination;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, RenderState};
use crate::shared::toast::use_toast;

fn kind_class(kind: InteractionType) -> &'static str {
    match kind {
        InteractionType::Call => "badge badge--info",
        InteractionType::Email => "badge badge--success",
        InteractionType::Meet => "badge badge--purple",
        InteractionType::Chat => "badge badge--warning",
    }
}

fn kind_icon(kind: InteractionType) -> &'static str {
    match kind {
        InteractionType::Call => "phone",
        InteractionType::Email => "mail",
        InteractionType::Meet => "calendar",
        InteractionType::Chat => "message",
    }
}

#[component]
pub fn InteractionsListPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let controller = ListController::new(
        EntityTag::Interaction,
        ListConfig::default(),
        api::fetch_interactions,
    );
    let pending_delete = RwSignal::new(ConfirmFlow::default());

    let perform_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_interaction(&id).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Interaction);
                }
                Err(e) => {
                    log::error!("delete interaction failed: {}", e);
                    toast.error(e);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Manage Interactions"</h2>
                    <Badge>{move || controller.total().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <div class="search">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Search interactions..."
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
                    <A href="/interactions/new" attr:class="button button--primary">
                        {icon("plus")}
                        " Log Interaction"
                    </A>
                </div>
            </div>

            {move || match controller.render_state() {
                RenderState::Loading => view! { <Loading /> }.into_any(),
                RenderState::Failed(error) => {
                    view! { <div class="alert alert--error">{error}</div> }.into_any()
                }
                RenderState::Empty => view! {
                    <Empty
                        title="No Interaction Found"
                        description="No interaction found. Log your first interaction here."
                        action_text="Log Interaction"
                        action_path="/interactions/new"
                    />
                }
                .into_any(),
                RenderState::Populated => view! {
                    {move || controller
                        .stale_error()
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <InteractionsTable
                        interactions=Signal::derive(move || controller.items())
                        on_delete=Callback::new(move |id| {
                            pending_delete.update(|f| f.request(id))
                        })
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
                message="This will permanently remove the interaction."
                on_confirm=Callback::new(perform_delete)
            />
        </div>
    }
}

#[component]
fn InteractionsTable(
    #[prop(into)] interactions: Signal<Vec<Interaction>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Interaction"</th>
                        <th class="table__header-cell">"Date"</th>
                        <th class="table__header-cell">"Client"</th>
                        <th class="table__header-cell">"Project"</th>
                        <th class="table__header-cell">"Notes"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || interactions.get()
                        key=|interaction| interaction.id.clone()
                        children=move |interaction| {
                            let edit_href = format!("/interactions/{}", interaction.id);
                            let delete_id = interaction.id.clone();
                            let client_name = interaction
                                .client
                                .as_ref()
                                .map(|c| c.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let project_title = interaction
                                .project
                                .as_ref()
                                .map(|p| p.title.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let notes = interaction
                                .notes
                                .clone()
                                .unwrap_or_else(|| "-".to_string());
                            let kind = interaction.kind;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <span class=kind_class(kind)>
                                            {icon(kind_icon(kind))}
                                            {kind.label()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format_datetime(&interaction.date)}</td>
                                    <td class="table__cell">{client_name}</td>
                                    <td class="table__cell">{project_title}</td>
                                    <td class="table__cell table__cell--truncate">{notes}</td>
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
