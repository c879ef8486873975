use serde::{Deserialize, Serialize};

use super::client::ClientSummary;
use super::project::ProjectSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub date: String,
    pub message: String,
    pub client_id: String,
    pub project_id: String,
    #[serde(default)]
    pub client: Option<ClientSummary>,
    #[serde(default)]
    pub project: Option<ProjectSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderDto {
    pub date: String,
    pub message: String,
    pub client_id: String,
    pub project_id: String,
}

/// Partial update payload: only defined fields are serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}
