//! HTTP transport for the REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from the token store at call time.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`] carrying the backend's message when
//! one can be parsed, so forms can show it verbatim. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

/// Base path prepended to every endpoint. Overridable at compile time via
/// the `STUDYHUB_API_BASE` environment variable.
pub const API_BASE: &str = match option_env!("STUDYHUB_API_BASE") {
    Some(base) => base,
    None => "/api/v1",
};

/// A failed API call: transport failure, non-2xx status, or unparsable body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable message, shown to the user as-is.
    pub message: String,
    /// HTTP status when a response was obtained; `None` on transport failure.
    pub status: Option<u16>,
}

impl ApiError {
    /// Error with no HTTP status: network failure, parse failure, SSR stub.
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    /// Error for a non-2xx response, with the message pulled from the JSON
    /// error body when one is present.
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn from_error_body(status: u16, body: Option<serde_json::Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(error_body_message)
            .unwrap_or_else(|| format!("request failed: {status}"));
        Self { message, status: Some(status) }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Pull a message out of a structured error body. The backend emits
/// `{"detail": ...}`; envelope-shaped errors carry `{"message": ...}`.
#[cfg(any(test, feature = "hydrate"))]
fn error_body_message(body: &serde_json::Value) -> Option<String> {
    for key in ["detail", "message"] {
        if let Some(text) = body.get(key).and_then(serde_json::Value::as_str) {
            return Some(text.to_owned());
        }
    }
    None
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(feature = "hydrate")]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
async fn send_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let url = endpoint(path);
    let mut builder = match method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
        Method::Delete => gloo_net::http::Request::delete(&url),
    };
    builder = builder.header("Content-Type", "application/json");
    if let Some(token) = crate::util::storage::token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let response = match body {
        Some(payload) => builder
            .json(payload)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?,
        None => builder
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?,
    };
    parse_response(response).await
}

#[cfg(feature = "hydrate")]
async fn parse_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(ApiError::from_error_body(response.status(), body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// unparsable response body.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Get, path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::transport("not available on server"))
    }
}

/// `POST` a JSON body (or none) and parse a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// unparsable response body.
pub async fn post<T: DeserializeOwned>(
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Post, path, body.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::transport("not available on server"))
    }
}

/// `PUT` a JSON body (or none) and parse a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// unparsable response body.
pub async fn put<T: DeserializeOwned>(
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Put, path, body.as_ref()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::transport("not available on server"))
    }
}

/// `DELETE` a JSON resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// unparsable response body.
pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Delete, path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::transport("not available on server"))
    }
}

/// `POST` form-encoded fields and parse a JSON response.
///
/// Used for the login exchange, which authenticates with credentials rather
/// than a pre-existing token, so no bearer header is attached.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// unparsable response body.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::transport("failed to build form body"))?;
        for (key, value) in fields {
            params.append(key, value);
        }
        let encoded: String = params.to_string().into();
        let response = gloo_net::http::Request::post(&endpoint(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encoded)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_response(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, fields);
        Err(ApiError::transport("not available on server"))
    }
}
