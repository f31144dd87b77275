//! Asynchronous action wrappers for the users API.
//!
//! # Design
//! Unlike the photos side, these wrappers execute their own HTTP round-trips
//! through a `reqwest::Client`. Each operation issues exactly one request and
//! suspends the calling task until a response or failure arrives; concurrent
//! calls are the caller's business, with no ordering or coordination here.
//!
//! `fetch_users` can be configured with a post-response delay, a development
//! aid for exercising loading states (2s is a comfortable value). Production
//! callers simply omit it.

use std::time::Duration;

use crate::error::ApiError;
use crate::types::User;

/// Async client for the users API, bound to an explicit base URL.
#[derive(Debug, Clone)]
pub struct UsersClient {
    base_url: String,
    http: reqwest::Client,
    fetch_delay: Option<Duration>,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            fetch_delay: None,
        }
    }

    /// Sleep this long after a `fetch_users` response arrives, before
    /// resolving. Development aid for exercising pending states.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// GET `/users` and resolve with the server's user list.
    ///
    /// With a configured fetch delay, resolution happens no earlier than
    /// that long after the response is received.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http { status, body });
        }
        let users =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(users)
    }

    /// DELETE `/users/{id}` for the given user.
    ///
    /// Returns the response body as-is (`Null` when empty). The body is not
    /// validated to confirm the deletion — callers should not read anything
    /// into its shape.
    pub async fn remove_user(&self, user: &User) -> Result<serde_json::Value, ApiError> {
        let response = self
            .http
            .delete(format!("{}/users/{}", self.base_url, user.id))
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http { status, body });
        }
        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
