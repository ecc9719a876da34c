//! REST client adapter for the platform API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token attached when the caller holds one and a fixed timeout applied to
//! every request. Server-side (SSR): stubs returning `Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All helpers return `Result<_, ApiError>`. 401 interpretation depends on
//! whether the request carried a bearer token: authenticated requests map
//! it to `SessionExpired` (the session store clears state on that variant),
//! login/register requests surface it as a credential failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AuthResponse, Credentials, Event, EventDraft, Profile, Role, Signup, Team, TeamRegistration,
};

/// Fixed client-side timeout applied to every outbound request.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(role: Role) -> &'static str {
    match role {
        Role::Student => "/api/student/login",
        Role::Manager => "/api/auth/login",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(role: Role) -> &'static str {
    match role {
        Role::Student => "/api/student/register",
        Role::Manager => "/api/auth/register",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(role: Role) -> &'static str {
    match role {
        Role::Student => "/api/student/profile",
        Role::Manager => "/api/manager/profile",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn event_endpoint(event_id: &str) -> String {
    format!("/api/events/{event_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn event_teams_endpoint(event_id: &str) -> String {
    format!("/api/events/{event_id}/teams")
}

#[cfg(any(test, feature = "hydrate"))]
fn team_payment_endpoint(team_id: &str) -> String {
    format!("/api/teams/{team_id}/payment")
}

/// Export-download URL for an event's registrations; navigated to via an
/// anchor rather than fetched, so the browser handles the file response.
pub fn export_endpoint(event_id: &str, format: &str) -> String {
    format!("/api/events/{event_id}/teams/export?format={format}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_failure_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Race a request against the fixed timeout.
#[cfg(feature = "hydrate")]
async fn with_timeout<F>(send: F) -> Result<gloo_net::http::Response, ApiError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match select(Box::pin(send), Box::pin(timeout)).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Decode a response body, mapping failures per the 401 policy above.
#[cfg(feature = "hydrate")]
async fn decode_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    authed: bool,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        if authed && status == 401 {
            return Err(ApiError::SessionExpired);
        }
        let message = resp
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| http_failure_message(status));
        return Err(ApiError::Status { status, message });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::Request::get(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer_value(token));
    }
    let resp = with_timeout(builder.send()).await?;
    decode_response(resp, token.is_some()).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::Request::post(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer_value(token));
    }
    let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = with_timeout(request.send()).await?;
    decode_response(resp, token.is_some()).await
}

#[cfg(feature = "hydrate")]
async fn put_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let mut builder = gloo_net::http::Request::put(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer_value(token));
    }
    let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = with_timeout(request.send()).await?;
    decode_response(resp, token.is_some()).await
}

/// Log in against the role's login endpoint.
///
/// # Errors
///
/// Surfaces the HTTP failure unchanged; a 401 here is a credential error,
/// not a session expiry.
pub async fn login(role: Role, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(login_endpoint(role), None, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Create an account against the role's register endpoint. A successful
/// response carries a token, so the new identity is logged in immediately.
///
/// # Errors
///
/// Surfaces the HTTP failure unchanged.
pub async fn register(role: Role, signup: &Signup) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(register_endpoint(role), None, signup).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, signup);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the identity record for a persisted token, used by session restore.
///
/// # Errors
///
/// `SessionExpired` when the token is no longer accepted.
pub async fn fetch_profile(role: Role, token: &str) -> Result<Profile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(profile_endpoint(role), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the public event list.
///
/// # Errors
///
/// Transport or status failure from the API.
pub async fn fetch_events() -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/events", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one event by id.
///
/// # Errors
///
/// Transport or status failure from the API.
pub async fn fetch_event(event_id: &str) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&event_endpoint(event_id), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err(ApiError::Unavailable)
    }
}

/// Create an event (manager).
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn create_event(token: &str, draft: &EventDraft) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/events", Some(token), draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(ApiError::Unavailable)
    }
}

/// Update an event (manager).
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn update_event(token: &str, event_id: &str, draft: &EventDraft) -> Result<Event, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&event_endpoint(event_id), Some(token), draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the events owned by the authenticated manager.
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn fetch_my_events(token: &str) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/manager/events", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the registered teams for an event (manager review view).
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn fetch_event_teams(token: &str, event_id: &str) -> Result<Vec<Team>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&event_teams_endpoint(event_id), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id);
        Err(ApiError::Unavailable)
    }
}

/// Register a team for an event (student).
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn register_team(
    token: &str,
    event_id: &str,
    registration: &TeamRegistration,
) -> Result<Team, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&event_teams_endpoint(event_id), Some(token), registration).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, event_id, registration);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authenticated student's registrations.
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn fetch_my_teams(token: &str) -> Result<Vec<Team>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/student/teams", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Mark a team's payment as verified (manager).
///
/// # Errors
///
/// `SessionExpired` on 401, otherwise the HTTP failure unchanged.
pub async fn verify_payment(token: &str, team_id: &str) -> Result<Team, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(
            &team_payment_endpoint(team_id),
            Some(token),
            &serde_json::json!({ "payment_verified": true }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, team_id);
        Err(ApiError::Unavailable)
    }
}
