//! Thin layer over `gloo_net` shared by every API module.
//!
//! Attaches JSON headers and the bearer token, and maps responses into [`ApiError`].

use super::ApiError;
use crate::shared::api_utils::api_url;
use crate::system::auth::{context, storage};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(method: Method, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Accept", "application/json");

    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turns non-success responses into errors. A 401 also drops the stored session.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    if error == ApiError::Unauthorized {
        log::warn!("{} {}: session rejected", status, response.url());
        context::session_expired();
    }
    Err(error)
}

/// Decodes a JSON body; an empty body decodes as `null` so `()`-like targets accept 204s.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path?query` decoded as JSON
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = builder(Method::Get, path)
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await?;
    decode(check(response).await?).await
}

/// `POST`/`PUT` with a JSON body, response decoded as JSON
pub async fn send_json<B, T>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder(method, path)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    decode(check(response).await?).await
}

/// `POST` with a JSON body, response returned as raw bytes (image exports)
pub async fn post_for_bytes<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    let response = builder(Method::Post, path)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    Ok(check(response).await?.binary().await?)
}

/// `DELETE path`; any response body is ignored
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = builder(Method::Delete, path).send().await?;
    check(response).await.map(|_| ())
}
