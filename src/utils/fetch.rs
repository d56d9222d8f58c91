//! Admin API requests over the Fetch API.
//!
//! Provides JSON GET (raced against a timeout) and JSON POST helpers.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined, which a fetch never does
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Best-effort message for a rejected promise value.
fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// GET a URL and parse the JSON body, failing after `FETCH_TIMEOUT_MS`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let request = build_request(url, "GET", None)?;
    let text = send(request, Some(FETCH_TIMEOUT_MS)).await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST a JSON body to a URL and parse the JSON reply.
///
/// No timeout is applied; the request runs until the browser settles it.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body)?;
    let request = build_request(url, "POST", Some(&body))?;
    let text = send(request, None).await?;
    Ok(serde_json::from_str(&text)?)
}

fn build_request(url: &str, method: &str, json_body: Option<&str>) -> Result<Request, FetchError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .set("Accept", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;
    if let Some(body) = json_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
        opts.set_body(&JsValue::from_str(body));
    }
    opts.set_headers(&headers);

    Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)
}

/// Send a request and read the body as text.
async fn send(request: Request, timeout_ms: Option<i32>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let fetch_promise = window.fetch_with_request(&request);

    let result = match timeout_ms {
        Some(ms) => match race_with_timeout(fetch_promise, ms).await {
            RaceResult::TimedOut => return Err(FetchError::Timeout),
            RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
            RaceResult::Completed(result) => result,
        },
        None => JsFuture::from(fetch_promise)
            .await
            .map_err(|e| FetchError::NetworkError(js_error_message(&e)))?,
    };

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
