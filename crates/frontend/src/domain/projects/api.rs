use contracts::domain::project::{
    CreateProjectDto, Project, ProjectStatus, UpdateProjectDto, UpdateProjectStatusDto,
};
use contracts::shared::api::ApiResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{
    api_url, auth_header, get_json, message_or, page_from, read_mutation_response,
};
use crate::shared::list_controller::Page;
use crate::shared::query::ListQuery;

/// Fetch one page of the freelancer's projects
pub async fn fetch_projects(query: ListQuery) -> Result<Page<Project>, String> {
    let response: ApiResponse<Vec<Project>> = get_json(&format!(
        "/project/get-all-project-by-freelancer?{}",
        query.query_string()
    ))
    .await?;
    page_from(response, "Failed to fetch projects")
}

/// Fetch all projects for form selects
pub async fn fetch_project_options() -> Result<Vec<Project>, String> {
    let response: ApiResponse<Vec<Project>> =
        get_json("/project/get-all-project-by-freelancer").await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch projects"));
    }
    Ok(response.data.unwrap_or_default())
}

/// Fetch a single project
pub async fn get_project(id: &str) -> Result<Project, String> {
    let response: ApiResponse<Project> = get_json(&format!(
        "/project/get-single-project-by-freelancer/{}",
        id
    ))
    .await?;
    if !response.success {
        return Err(message_or(response.message, "Failed to fetch project"));
    }
    response
        .data
        .ok_or_else(|| "Malformed project response".to_string())
}

/// Create a project
pub async fn create_project(dto: &CreateProjectDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/project"))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to create project", "Project created").await
}

/// Update a project (partial payload)
pub async fn update_project(id: &str, dto: &UpdateProjectDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::patch(&api_url(&format!("/project/{}", id)))
        .header("Authorization", &auth)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to update project", "Project updated").await
}

/// Change only the status of a project
pub async fn update_project_status(id: &str, status: ProjectStatus) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;
    let dto = UpdateProjectStatusDto { status };

    let response = Request::patch(&api_url(&format!("/project/update-project-status/{}", id)))
        .header("Authorization", &auth)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to update status", "Status updated").await
}

/// Delete a project
pub async fn delete_project(id: &str) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/project/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_mutation_response(response, "Failed to delete project", "Project has been deleted").await
}
