use contracts::domain::client::Client;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::clients::api;
use crate::shared::cache::{use_invalidation, EntityTag};
use crate::shared::components::confirm::{ConfirmDialog, ConfirmFlow};
use crate::shared::components::empty::Empty;
use crate::shared::components::loading::Loading;
use crate::shared::components::pagination::Pagination;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListConfig, ListController, RenderState};
use crate::shared::toast::use_toast;

#[component]
pub fn ClientsListPage() -> impl IntoView {
    let toast = use_toast();
    let bus = use_invalidation();
    let controller =
        ListController::new(EntityTag::Client, ListConfig::default(), api::fetch_clients);
    let pending_delete = RwSignal::new(ConfirmFlow::default());

    let perform_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_client(&id).await {
                Ok(message) => {
                    toast.success(message);
                    bus.invalidate(EntityTag::Client);
                }
                Err(e) => {
                    log::error!("delete client failed: {}", e);
                    toast.error(e);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Manage Clients"</h2>
                    <Badge>{move || controller.total().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <div class="search">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Search clients..."
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
                    <A href="/clients/new" attr:class="button button--primary">
                        {icon("plus")}
                        " Add Client"
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
                        title="No Client Found"
                        description="No client found. Create client here."
                        action_text="Create Client"
                        action_path="/clients/new"
                    />
                }
                .into_any(),
                RenderState::Populated => view! {
                    {move || controller
                        .stale_error()
                        .map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    <ClientsTable
                        clients=Signal::derive(move || controller.items())
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
                message="This will permanently remove the client."
                on_confirm=Callback::new(perform_delete)
            />
        </div>
    }
}

#[component]
fn ClientsTable(
    #[prop(into)] clients: Signal<Vec<Client>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Email"</th>
                        <th class="table__header-cell">"Phone"</th>
                        <th class="table__header-cell">"Company"</th>
                        <th class="table__header-cell">"Projects"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || clients.get()
                        key=|client| client.id.clone()
                        children=move |client| {
                            let edit_href = format!("/clients/{}", client.id);
                            let delete_id = client.id.clone();
                            let company = client
                                .company
                                .clone()
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{client.name.clone()}</td>
                                    <td class="table__cell">{client.email.clone()}</td>
                                    <td class="table__cell">{client.phone_number.clone()}</td>
                                    <td class="table__cell">{company}</td>
                                    <td class="table__cell">{client.projects.len()}</td>
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
