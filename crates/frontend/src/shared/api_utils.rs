//! API utilities for frontend-backend communication.
//!
//! Provides helpers for constructing API URLs, the bearer auth header, and a
//! GET pool that de-duplicates concurrent identical requests.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use contracts::shared::api::ApiResponse;

use crate::shared::list_controller::Page;
use crate::system::auth::storage;

/// Base URL for API requests, derived from the current window location.
/// The backend listens on port 5000 next to wherever the app is served from.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

/// Full API URL for a path like `/client` or `/project/:id`.
pub fn api_url(path: &str) -> String {
    format!("{}/api/v1{}", api_base(), path)
}

/// `Bearer <token>` header value, if a session token is stored.
pub fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Falls back when the server returned an empty message.
pub fn message_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

type SharedGet = Shared<LocalBoxFuture<'static, Result<String, String>>>;

thread_local! {
    static IN_FLIGHT: RefCell<HashMap<String, SharedGet>> = RefCell::new(HashMap::new());
}

async fn get_text(url: String) -> Result<String, String> {
    let mut request = Request::get(&url).header("Accept", "application/json");
    if let Some(auth) = auth_header() {
        request = request.header("Authorization", &auth);
    }
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// GET with in-flight de-duplication: concurrent identical URLs share a
/// single network round trip, each caller receiving a clone of the result.
pub async fn get_shared(url: String) -> Result<String, String> {
    let fut = IN_FLIGHT.with(|pool| {
        let mut pool = pool.borrow_mut();
        if let Some(existing) = pool.get(&url) {
            existing.clone()
        } else {
            let fut = get_text(url.clone()).boxed_local().shared();
            pool.insert(url.clone(), fut.clone());
            fut
        }
    });
    let result = fut.await;
    IN_FLIGHT.with(|pool| {
        pool.borrow_mut().remove(&url);
    });
    result
}

/// GET an API path and decode the response envelope.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<ApiResponse<T>, String> {
    let body = get_shared(api_url(path)).await?;
    serde_json::from_str(&body).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Turn a list envelope into a page, using `context` when the server
/// reported failure without a message.
pub fn page_from<T>(response: ApiResponse<Vec<T>>, context: &str) -> Result<Page<T>, String> {
    if !response.success {
        return Err(message_or(response.message, context));
    }
    let total = response.meta.map(|m| m.total).unwrap_or_default();
    Ok(Page {
        items: response.data.unwrap_or_default(),
        total,
    })
}

/// Decode a mutation response, yielding the server message (or
/// `success_fallback`) on success.
pub async fn read_mutation_response(
    response: gloo_net::http::Response,
    context: &str,
    success_fallback: &str,
) -> Result<String, String> {
    if !response.ok() {
        return Err(format!("{}: HTTP {}", context, response.status()));
    }
    let body: ApiResponse<serde_json::Value> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if !body.success {
        return Err(message_or(body.message, context));
    }
    Ok(message_or(body.message, success_fallback))
}
