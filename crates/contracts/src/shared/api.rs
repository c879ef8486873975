use serde::{Deserialize, Serialize};

/// Response envelope used by every endpoint: `{ success, message, data, meta? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<ListMeta>,
}

/// Pagination metadata attached to list responses. `total` is the full
/// filtered count server-side, not the page length.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub total_page: usize,
}
