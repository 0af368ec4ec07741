//! Auth configuration types

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Default IAM endpoint
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Static bearer token, managed by the caller
    Bearer {
        /// The bearer token
        token: String,
    },

    /// IAM API key, exchanged for a short-lived bearer token
    Iam {
        /// The API key
        apikey: String,
        /// IAM base URL (the token path is appended)
        url: String,
        /// Optional client id for the token request
        client_id: Option<String>,
        /// Optional client secret for the token request
        client_secret: Option<String>,
        /// Optional scope for the token request
        scope: Option<String>,
    },
}

impl AuthConfig {
    /// IAM authentication against the default endpoint
    pub fn iam(apikey: impl Into<String>) -> Self {
        Self::Iam {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
        }
    }

    /// Short name of the scheme, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "noauth",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearertoken",
            Self::Iam { .. } => "iam",
        }
    }

    /// Check that the required credentials are present and well-formed
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::Basic { username, password } => {
                check_credential("username", username)?;
                check_credential("password", password)
            }
            Self::Bearer { token } => check_credential("bearer_token", token),
            Self::Iam {
                apikey,
                url,
                client_id,
                client_secret,
                ..
            } => {
                check_credential("apikey", apikey)?;
                if url.is_empty() {
                    return Err(Error::missing_field("auth_url"));
                }
                if client_id.is_some() != client_secret.is_some() {
                    return Err(Error::invalid_value(
                        "client_id",
                        "client_id and client_secret must be set together",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Credentials must be non-empty and not wrapped in braces or quotes
fn check_credential(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) || value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(Error::invalid_value(
            field,
            "value must not be wrapped in braces or quotes",
        ));
    }
    Ok(())
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const REDACTED: &str = "<redacted>";
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &REDACTED)
                .finish(),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &REDACTED).finish(),
            Self::Iam {
                url,
                client_id,
                scope,
                ..
            } => f
                .debug_struct("Iam")
                .field("apikey", &REDACTED)
                .field("url", url)
                .field("client_id", client_id)
                .field("scope", scope)
                .finish_non_exhaustive(),
        }
    }
}

/// Cached bearer token
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token should be replaced
    pub refresh_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, refresh_at: Option<DateTime<Utc>>) -> Self {
        Self { token, refresh_at }
    }

    /// Token valid for `seconds`; refreshed once 80% of that has elapsed.
    ///
    /// A lifetime too large to represent never goes stale.
    pub fn with_lifetime(token: String, seconds: i64) -> Self {
        let refresh_at = chrono::Duration::try_milliseconds(seconds.saturating_mul(800))
            .and_then(|after| Utc::now().checked_add_signed(after));
        Self { token, refresh_at }
    }

    /// Whether the token should be replaced before the next request
    pub fn is_stale(&self) -> bool {
        self.refresh_at.is_some_and(|at| Utc::now() >= at)
    }
}
