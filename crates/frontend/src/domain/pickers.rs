//! Option loaders for the client/project selects used by the detail forms.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::clients::api as clients_api;
use crate::domain::projects::api as projects_api;

/// Loads the freelancer's clients into `(id, name)` options, with a leading
/// placeholder entry.
pub fn load_client_options(options: RwSignal<Vec<(String, String)>>) {
    spawn_local(async move {
        match clients_api::fetch_client_options().await {
            Ok(clients) => {
                let mut list = vec![(String::new(), "Select a client...".to_string())];
                list.extend(clients.into_iter().map(|c| (c.id, c.name)));
                options.set(list);
            }
            Err(e) => log::error!("load client options failed: {}", e),
        }
    });
}

/// Loads the freelancer's projects into `(id, title)` options, with a
/// leading placeholder entry.
pub fn load_project_options(options: RwSignal<Vec<(String, String)>>) {
    spawn_local(async move {
        match projects_api::fetch_project_options().await {
            Ok(projects) => {
                let mut list = vec![(String::new(), "Select a project...".to_string())];
                list.extend(projects.into_iter().map(|p| (p.id, p.title)));
                options.set(list);
            }
            Err(e) => log::error!("load project options failed: {}", e),
        }
    });
}
