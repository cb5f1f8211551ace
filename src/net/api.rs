//! REST client for the remote backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`, carrying the session
//! token as a bearer credential. Outside the browser the functions are
//! inert stubs so the crate builds and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed fetch degrades into an
//! inline error indicator instead of crashing the view. One attempt per
//! call; retrying is left to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{AuthResponse, RecordPage};

/// Production API host. Override at compile time with `STREETZ_API_BASE`
/// for staging builds.
pub const DEFAULT_API_BASE: &str = "https://streetz.xyz/api";

pub fn api_base() -> &'static str {
    option_env!("STREETZ_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "csr"))]
fn auth_endpoint() -> String {
    format!("{}/admins/auth-with-password", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn records_endpoint(collection: &str, page: u32, per_page: u32) -> String {
    format!(
        "{}/collections/{collection}/records?perPage={per_page}&page={page}",
        api_base()
    )
}

#[cfg(any(test, feature = "csr"))]
fn record_endpoint(collection: &str, id: &str) -> String {
    format!("{}/collections/{collection}/records/{id}", api_base())
}

/// Public URL of an uploaded user avatar file.
pub fn avatar_url(user_id: &str, file: &str) -> String {
    format!("{}/files/_pb_users_auth_/{user_id}/{file}", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Exchange admin credentials for a bearer token via
/// `POST /admins/auth-with-password`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status (bad credentials included).
pub async fn auth_with_password(identity: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "identity": identity, "password": password });
        let resp = gloo_net::http::Request::post(&auth_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (identity, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch one page of `collection` records, authorized with the session
/// token.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_records<T: DeserializeOwned>(
    token: &str,
    collection: &str,
    page: u32,
    per_page: u32,
) -> Result<RecordPage<T>, String> {
    #[cfg(feature = "csr")]
    {
        let url = records_endpoint(collection, page, per_page);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<RecordPage<T>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, collection, page, per_page);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch a single `collection` record by id.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_record<T: DeserializeOwned>(
    token: &str,
    collection: &str,
    id: &str,
) -> Result<T, String> {
    #[cfg(feature = "csr")]
    {
        let url = record_endpoint(collection, id);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, collection, id);
        Err("not available outside the browser".to_owned())
    }
}
