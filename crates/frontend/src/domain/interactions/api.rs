use contracts::domain::interaction::{CreateInteractionDto, Interaction, UpdateInteractionDto};
use contracts::shared::api::ApiResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{
    api_url, auth_header, get_json, message_or, page_from, read_mutation_response,
};
use crate::shared::list_controller::Page;
use crate::shared::query::ListQuery;

/// Fetch one page of interactions
pub async fn fetch_interactions(query: ListQuery) -> Result<Page<Interaction>, String> {
    let response: ApiResponse<Vec<Interaction>> =
        get_json(&format!("/interaction?{}", query.query_string())).await?;
    page_from(response, "Failed to fetch interactions")
}

/// Fetch a single interaction
pub async fn get_interaction(id: &str) -> Result<Interaction, String> {
    let response: ApiResponse<Interaction> =
        get_json(&format!("/interaction/get-single-interaction/{}", id)).await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch interaction"));
    }
    response
        .data
        .ok_or_else(|| "Malformed interaction response".to_string())
}

/// Create an interaction
pub async fn create_interaction(dto: &CreateInteractionDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/interaction"))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to create interaction", "Interaction logged").await
}

/// Update an interaction (partial payload)
pub async fn update_interaction(id: &str, dto: &UpdateInteractionDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::patch(&api_url(&format!("/interaction/{}", id)))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to update interaction", "Interaction updated").await
}

/// Delete an interaction
pub async fn delete_interaction(id: &str) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/interaction/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(
        response,
        "Failed to delete interaction",
        "Interaction has been deleted",
    )
    .await
}
