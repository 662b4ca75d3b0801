//! HTTP helpers for the back-office REST API with consistent timeouts and
//! error handling. Feature clients call these instead of building requests by
//! hand so the timeout policy, cookie handling, and envelope unwrapping stay
//! in one place. The helpers do not store secrets; session state lives in
//! `HttpOnly` cookies attached by the browser.

use super::{
    config::AppConfig,
    envelope::{Envelope, ListEnvelope, Page},
    errors::AppError,
};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Request timeout (milliseconds) applied to every helper in this module.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches a single resource wrapped in a `{ "data": ... }` envelope.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let envelope: Envelope<T> = get_raw(&api_url(path)).await?;
    Ok(envelope.data)
}

/// Fetches a paginated collection wrapped in a list envelope.
pub async fn get_page<T: DeserializeOwned>(path: &str) -> Result<Page<T>, AppError> {
    let envelope: ListEnvelope<T> = get_raw(&api_url(path)).await?;
    Ok(envelope.into())
}

/// Fetches unwrapped JSON with cookies and returns `None` on 204 or 401.
/// Used for session hydration where "no session" is not an error.
pub async fn get_optional_json<T: DeserializeOwned>(path: &str) -> Result<Option<T>, AppError> {
    let url = api_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Encode(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.status() == 204 || response.status() == 401 {
        return Ok(None);
    }
    handle_json_response(response).await.map(Some)
}

/// Fetches a response body from an explicit URL without credentials. Used for
/// the remote sidebar catalog, which may be served from a static host.
pub async fn get_text_from_url(url: &str) -> Result<String, AppError> {
    let url = url.trim().to_string();
    if url.is_empty() {
        return Err(AppError::Config("Catalog URL is empty.".to_string()));
    }
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Encode(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        response
            .text()
            .await
            .map_err(|err| AppError::Decode(format!("Failed to read response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Posts JSON with cookies and expects an empty (or ignored) response body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(path, "POST", body).await?;
    handle_empty_response(response).await
}

/// Posts JSON with cookies and parses an unwrapped JSON response.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_json(path, "POST", body).await?;
    handle_json_response(response).await
}

/// Posts an empty body with cookies, used to clear a session.
pub async fn post_empty(path: &str) -> Result<(), AppError> {
    let url = api_url(path);
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body("")
            .map_err(|err| AppError::Encode(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Replaces a resource with a JSON PUT; the response body is ignored.
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_json(path, "PUT", body).await?;
    handle_empty_response(response).await
}

/// Deletes a resource; the response body is ignored.
pub async fn delete_resource(path: &str) -> Result<(), AppError> {
    let url = api_url(path);
    let response = send_with_timeout(move |signal| {
        Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Encode(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

async fn get_raw<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    let url = url.to_string();
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Encode(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

async fn send_json<B: Serialize>(
    path: &str,
    method: &str,
    body: &B,
) -> Result<Response, AppError> {
    let url = api_url(path);
    let payload =
        to_string(body).map_err(|err| AppError::Encode(format!("Failed to encode request: {err}")))?;
    let method = method.to_string();
    send_with_timeout(move |signal| {
        let builder = match method.as_str() {
            "PUT" => Request::put(&url),
            _ => Request::post(&url),
        };
        builder
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Encode(format!("Failed to build request: {err}")))
    })
    .await
}

/// Joins the configured API base URL with the provided path.
fn api_url(path: &str) -> String {
    let config = AppConfig::load();
    join_url(&config.api_base_url, path)
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into user-facing variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("The server took too long to respond.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout so a dead backend never hangs the UI.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Decode(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Trims and truncates HTTP error bodies before they reach the UI.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
