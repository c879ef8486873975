use contracts::domain::reminder::{CreateReminderDto, Reminder, UpdateReminderDto};
use contracts::shared::api::ApiResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{
    api_url, auth_header, get_json, message_or, page_from, read_mutation_response,
};
use crate::shared::list_controller::Page;
use crate::shared::query::ListQuery;

/// Fetch one page of reminders
pub async fn fetch_reminders(query: ListQuery) -> Result<Page<Reminder>, String> {
    let response: ApiResponse<Vec<Reminder>> =
        get_json(&format!("/reminder?{}", query.query_string())).await?;
    page_from(response, "Failed to fetch reminders")
}

/// Fetch a single reminder
pub async fn get_reminder(id: &str) -> Result<Reminder, String> {
    let response: ApiResponse<Reminder> = get_json(&format!("/reminder/{}", id)).await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch reminder"));
    }
    response
        .data
        .ok_or_else(|| "Malformed reminder response".to_string())
}

/// Create a reminder
pub async fn create_reminder(dto: &CreateReminderDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/reminder"))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to create reminder", "Reminder created").await
}

/// Update a reminder (partial payload)
pub async fn update_reminder(id: &str, dto: &UpdateReminderDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::patch(&api_url(&format!("/reminder/{}", id)))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to update reminder", "Reminder updated").await
}

/// Delete a reminder
pub async fn delete_reminder(id: &str) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/reminder/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to delete reminder", "Reminder has been deleted").await
}
