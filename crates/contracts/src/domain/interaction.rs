use serde::{Deserialize, Serialize};

use super::client::ClientSummary;
use super::project::ProjectSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    Call,
    Email,
    Meet,
    Chat,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Call => "CALL",
            InteractionType::Email => "EMAIL",
            InteractionType::Meet => "MEET",
            InteractionType::Chat => "CHAT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InteractionType::Call => "Call",
            InteractionType::Email => "Email",
            InteractionType::Meet => "Meeting",
            InteractionType::Chat => "Chat",
        }
    }

    pub fn all() -> [InteractionType; 4] {
        [
            InteractionType::Email,
            InteractionType::Call,
            InteractionType::Meet,
            InteractionType::Chat,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub notes: Option<String>,
    pub client_id: String,
    pub project_id: String,
    #[serde(default)]
    pub client: Option<ClientSummary>,
    #[serde(default)]
    pub project: Option<ProjectSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteractionDto {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub client_id: String,
    pub project_id: String,
}

/// Partial update payload: only defined fields are serialized.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInteractionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InteractionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}
