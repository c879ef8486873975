use contracts::shared::api::ApiResponse;
use contracts::system::auth::{AuthTokens, LoginDto, RegisterDto, SessionUser};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header, message_or};

/// Login with email and password
pub async fn login(dto: &LoginDto) -> Result<AuthTokens, String> {
    let response = Request::post(&api_url("/auth/login"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let body: ApiResponse<AuthTokens> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if !body.success {
        return Err(message_or(body.message, "Login failed"));
    }
    body.data.ok_or_else(|| "Malformed login response".to_string())
}

/// Register a new freelancer account
pub async fn register(dto: &RegisterDto) -> Result<String, String> {
    let response = Request::post(&api_url("/auth/register"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Registration failed: {}", response.status()));
    }

    let body: ApiResponse<SessionUser> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if !body.success {
        return Err(message_or(body.message, "Registration failed"));
    }
    Ok(message_or(body.message, "Account created"))
}

/// Fetch the session user for the stored token
pub async fn get_me() -> Result<SessionUser, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/auth/get-me"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch session: {}", response.status()));
    }

    let body: ApiResponse<SessionUser> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if !body.success {
        return Err(message_or(body.message, "Failed to fetch session"));
    }
    body.data.ok_or_else(|| "Malformed session response".to_string())
}
