//! HTTP calls to the external support-desk backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying
//! `Authorization: Bearer {token}`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; nothing is retried. Pages
//! turn the error into banner text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AccountAction, CreateTicketRequest, CreateUserRequest, UserRecord};
use crate::config::ApiEndpoints;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ApiResponse, ErrorBody};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

/// Whether a 2xx body must say `success: true` to count as success.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SuccessFlag {
    /// Only an explicit `success: true` is accepted.
    Required,
    /// Anything except an explicit `success: false` is accepted.
    Optional,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: Option<&str>) -> Result<String, ApiError> {
    match token {
        Some(t) if !t.is_empty() => Ok(format!("Bearer {t}")),
        _ => Err(ApiError::MissingToken),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

/// Classify a completed HTTP exchange.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    flag: SuccessFlag,
) -> Result<ApiResponse<T>, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| non_empty(b.message));
        return Err(ApiError::Rejected { status, message });
    }
    let body = if body.trim().is_empty() { "{}" } else { body };
    let parsed: ApiResponse<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let accepted = match flag {
        SuccessFlag::Required => parsed.success == Some(true),
        SuccessFlag::Optional => parsed.success != Some(false),
    };
    if !accepted {
        return Err(ApiError::Unsuccessful { message: non_empty(parsed.message) });
    }
    Ok(parsed)
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    flag: SuccessFlag,
) -> Result<ApiResponse<T>, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let result = interpret_response(status, &body, flag);
    if let Err(e) = &result {
        log::error!("{} {status}: {e}", resp.url());
    }
    result
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
    url: &str,
    token: Option<&str>,
    body: &B,
    flag: SuccessFlag,
) -> Result<ApiResponse<T>, ApiError> {
    let auth = bearer_value(token)?;
    let resp = gloo_net::http::Request::post(url)
        .header("Authorization", &auth)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
    read_response(resp, flag).await
}

/// Submit a new ticket.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without sending when `token` is absent,
/// otherwise the classified HTTP failure. A 2xx body without a `success` flag
/// is accepted.
pub async fn create_ticket(
    endpoints: &ApiEndpoints,
    token: Option<&str>,
    request: &CreateTicketRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<_, super::types::NoPayload>(&endpoints.create_ticket, token, request, SuccessFlag::Optional)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a user account. The body must report `success: true`.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without sending when `token` is absent,
/// otherwise the classified HTTP failure.
pub async fn create_user(
    endpoints: &ApiEndpoints,
    token: Option<&str>,
    request: &CreateUserRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<_, super::types::NoPayload>(&endpoints.create_user, token, request, SuccessFlag::Required)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch every user record.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without sending when `token` is absent,
/// otherwise the classified HTTP failure.
pub async fn fetch_users(endpoints: &ApiEndpoints, token: Option<&str>) -> Result<Vec<UserRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer_value(token)?;
        let url = &endpoints.get_all_users;
        let resp = gloo_net::http::Request::get(url)
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| {
                log::error!("GET {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
        let parsed = read_response::<super::types::UserListPayload>(resp, SuccessFlag::Required).await?;
        Ok(parsed.payload.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Restrict or unrestrict one account. The body sent is an empty JSON object.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] without sending when `token` is absent,
/// otherwise the classified HTTP failure.
pub async fn change_account_status(
    endpoints: &ApiEndpoints,
    token: Option<&str>,
    user_id: &str,
    action: AccountAction,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = account_action_url(endpoints, user_id, action);
        post_json::<_, super::types::NoPayload>(&url, token, &serde_json::json!({}), SuccessFlag::Required)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token, user_id, action);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn account_action_url(endpoints: &ApiEndpoints, user_id: &str, action: AccountAction) -> String {
    match action {
        AccountAction::Restrict => endpoints.restrict_url(user_id),
        AccountAction::Unrestrict => endpoints.unrestrict_url(user_id),
    }
}
