use contracts::dashboards::TotalCount;
use contracts::domain::reminder::Reminder;
use contracts::shared::api::ApiResponse;

use crate::shared::api_utils::{get_json, message_or};

/// Total number of the freelancer's clients
pub async fn fetch_total_clients() -> Result<usize, String> {
    let response: ApiResponse<TotalCount> =
        get_json("/freelancer/get-total-clients-by-freelancer").await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch client total"));
    }
    Ok(response.data.map(|d| d.count).unwrap_or_default())
}

/// Total number of the freelancer's projects
pub async fn fetch_total_projects() -> Result<usize, String> {
    let response: ApiResponse<TotalCount> =
        get_json("/freelancer/get-total-projects-by-freelancer").await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch project total"));
    }
    Ok(response.data.map(|d| d.count).unwrap_or_default())
}

/// Reminders coming due soon
pub async fn fetch_due_soon_reminders() -> Result<Vec<Reminder>, String> {
    let response: ApiResponse<Vec<Reminder>> =
        get_json("/freelancer/get-due-soon-reminders-by-freelancer").await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch reminders"));
    }
    Ok(response.data.unwrap_or_default())
}
