use contracts::domain::client::{Client, CreateClientDto, UpdateClientDto};
use contracts::shared::api::ApiResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{
    api_url, auth_header, get_json, message_or, page_from, read_mutation_response,
};
use crate::shared::list_controller::Page;
use crate::shared::query::ListQuery;

/// Fetch one page of the freelancer's clients
pub async fn fetch_clients(query: ListQuery) -> Result<Page<Client>, String> {
    let response: ApiResponse<Vec<Client>> =
        get_json(&format!("/client?{}", query.query_string())).await?;
    page_from(response, "Failed to fetch clients")
}

/// Fetch all clients for form selects
pub async fn fetch_client_options() -> Result<Vec<Client>, String> {
    let response: ApiResponse<Vec<Client>> = get_json("/client").await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch clients"));
    }
    Ok(response.data.unwrap_or_default())
}

/// Fetch a single client
pub async fn get_client(id: &str) -> Result<Client, String> {
    let response: ApiResponse<Client> = get_json(&format!("/client/{}", id)).await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch client"));
    }
    response
        .data
        .ok_or_else(|| "Malformed client response".to_string())
}

/// Create a client
pub async fn create_client(dto: &CreateClientDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/client"))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to create client", "Client created").await
}

/// Update a client (partial payload)
pub async fn update_client(id: &str, dto: &UpdateClientDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::patch(&api_url(&format!("/client/{}", id)))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to update client", "Client updated").await
}

/// Delete a client
pub async fn delete_client(id: &str) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/client/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to delete client", "Client has been deleted").await
}
