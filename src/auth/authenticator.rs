//! Authenticator implementation
//!
//! Applies credentials to outgoing requests and keeps the IAM bearer token
//! cached until it is due for refresh.

use super::types::{AuthConfig, CachedToken};
use crate::error::{Error, Result};
use crate::http::error_message;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Path of the token endpoint below the IAM base URL
const IAM_TOKEN_PATH: &str = "/identity/token";

/// Grant type for exchanging an API key
const IAM_APIKEY_GRANT: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Cached IAM token
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create an authenticator with a custom HTTP client
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),
            AuthConfig::Basic { username, password } => {
                Ok(req.basic_auth(username, Some(password)))
            }
            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token)),
            AuthConfig::Iam { .. } => {
                let token = self.token().await?;
                Ok(req.bearer_auth(token))
            }
        }
    }

    /// Get a valid IAM token, fetching a new one when the cached one is stale
    pub async fn token(&self) -> Result<String> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| !t.is_stale()) {
                return Ok(token.token.clone());
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref().filter(|t| !t.is_stale()) {
            return Ok(token.token.clone());
        }

        let fresh = self.fetch_iam_token().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    /// Exchange the API key for a bearer token
    async fn fetch_iam_token(&self) -> Result<CachedToken> {
        let AuthConfig::Iam {
            apikey,
            url,
            client_id,
            client_secret,
            scope,
        } = &self.config
        else {
            return Err(Error::auth(format!(
                "token exchange is not supported for '{}' authentication",
                self.config.kind()
            )));
        };

        let token_url = format!("{}{IAM_TOKEN_PATH}", url.trim_end_matches('/'));
        let mut form = vec![
            ("grant_type", IAM_APIKEY_GRANT),
            ("apikey", apikey.as_str()),
            ("response_type", "cloud_iam"),
        ];
        if let Some(scope) = scope {
            form.push(("scope", scope.as_str()));
        }

        let mut req = self
            .http_client
            .post(&token_url)
            .header(ACCEPT, "application/json")
            .form(&form);
        if let (Some(id), Some(secret)) = (client_id, client_secret) {
            req = req.basic_auth(id, Some(secret));
        }

        debug!(url = %token_url, "Requesting IAM access token");
        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenRefresh {
                message: format!(
                    "IAM token request failed with status {status}: {}",
                    error_message(&body)
                ),
            });
        }

        let token_response: IamTokenResponse = response.json().await?;
        Ok(token_response.into_cached_token())
    }

    /// Clear the cached token, forcing a new exchange on the next request
    pub async fn clear_cache(&self) {
        let mut cached = self.cached_token.write().await;
        *cached = None;
    }

    /// Get the current auth config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// IAM token response
#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl IamTokenResponse {
    fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(secs) => CachedToken::with_lifetime(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        }
    }
}
