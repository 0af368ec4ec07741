//! Service client configuration
//!
//! A [`ProjectV1Config`] can be built in code, from `PROJECT_*` environment
//! variables, or from a YAML file. All three routes resolve credentials the
//! same way.

use crate::auth::{AuthConfig, DEFAULT_IAM_URL};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{AuthType, BackoffType, OptionStringExt, StringMap};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default endpoint of the Projects API
pub const DEFAULT_SERVICE_URL: &str = "https://projects.api.cloud.ibm.com";

/// Prefix of the environment variables read by [`ProjectV1Config::from_env`]
pub const ENV_PREFIX: &str = "PROJECT";

// ============================================================================
// Client Config
// ============================================================================

/// Everything needed to build a [`crate::project::ProjectV1`] client
#[derive(Debug, Clone)]
pub struct ProjectV1Config {
    /// Base URL of the Projects API
    pub service_url: String,
    /// Authentication scheme and credentials
    pub auth: AuthConfig,
    /// Transport settings
    pub http: HttpClientConfig,
}

impl Default for ProjectV1Config {
    fn default() -> Self {
        Self::new(AuthConfig::None)
    }
}

impl ProjectV1Config {
    /// Config for the default endpoint with the given credentials
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            auth,
            http: HttpClientConfig::default(),
        }
    }

    /// Override the service URL
    #[must_use]
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Override the transport settings
    #[must_use]
    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }

    /// Read `PROJECT_*` variables from the process environment
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&vars)
    }

    /// Read `PROJECT_*` variables from a map.
    ///
    /// Recognised keys (after the `PROJECT_` prefix): `URL`, `AUTH_TYPE`,
    /// `APIKEY`, `AUTH_URL`, `CLIENT_ID`, `CLIENT_SECRET`, `SCOPE`,
    /// `BEARER_TOKEN`, `USERNAME`, `PASSWORD`, `MAX_RETRIES`,
    /// `TIMEOUT_SECS`.
    pub fn from_env_map(vars: &HashMap<String, String>) -> Result<Self> {
        let var = |name: &str| {
            vars.get(&format!("{ENV_PREFIX}_{name}"))
                .cloned()
                .none_if_empty()
        };

        let auth = AuthSection {
            auth_type: var("AUTH_TYPE")
                .map(|t| t.parse::<AuthType>())
                .transpose()?,
            apikey: var("APIKEY"),
            url: var("AUTH_URL"),
            client_id: var("CLIENT_ID"),
            client_secret: var("CLIENT_SECRET"),
            scope: var("SCOPE"),
            bearer_token: var("BEARER_TOKEN"),
            username: var("USERNAME"),
            password: var("PASSWORD"),
        };

        let mut http = HttpClientConfig::default();
        if let Some(retries) = var("MAX_RETRIES") {
            http.max_retries = parse_number("max_retries", &retries)?;
        }
        if let Some(secs) = var("TIMEOUT_SECS") {
            http.timeout = Duration::from_secs(parse_number("timeout_secs", &secs)?);
        }

        let config = Self {
            service_url: var("URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            auth: auth.resolve()?,
            http,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML config document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        let config = file.into_config()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the service URL and credentials
    pub fn validate(&self) -> Result<()> {
        parse_service_url(&self.service_url)?;
        self.auth.validate()
    }
}

/// Parse and check a service URL
pub(crate) fn parse_service_url(url: &str) -> Result<Url> {
    if url.is_empty() {
        return Err(Error::missing_field("service_url"));
    }
    let parsed = Url::parse(url)
        .map_err(|e| Error::invalid_value("service_url", format!("'{url}': {e}")))?;
    if parsed.cannot_be_a_base() {
        return Err(Error::invalid_value(
            "service_url",
            format!("'{url}' cannot be used as a base URL"),
        ));
    }
    Ok(parsed)
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::invalid_value(field, format!("'{value}': {e}")))
}

// ============================================================================
// YAML File Layout
// ============================================================================

/// On-disk config layout
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    service_url: Option<String>,
    #[serde(default)]
    auth: AuthSection,
    #[serde(default)]
    http: HttpSection,
}

impl ConfigFile {
    fn into_config(self) -> Result<ProjectV1Config> {
        Ok(ProjectV1Config {
            service_url: self
                .service_url
                .none_if_empty()
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
            auth: self.auth.resolve()?,
            http: self.http.into_http_config(),
        })
    }
}

/// Credentials, shared by the YAML and environment routes
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AuthSection {
    #[serde(rename = "type", default)]
    auth_type: Option<AuthType>,
    #[serde(default)]
    apikey: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    bearer_token: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl AuthSection {
    /// Pick the scheme (explicit type, else IAM when an API key is present)
    /// and collect its credentials.
    fn resolve(self) -> Result<AuthConfig> {
        let auth_type = self.auth_type.unwrap_or(if self.apikey.is_some() {
            AuthType::Iam
        } else {
            AuthType::NoAuth
        });

        let auth = match auth_type {
            AuthType::NoAuth => AuthConfig::None,
            AuthType::Iam => AuthConfig::Iam {
                apikey: self.apikey.ok_or_else(|| Error::missing_field("apikey"))?,
                url: self.url.unwrap_or_else(|| DEFAULT_IAM_URL.to_string()),
                client_id: self.client_id,
                client_secret: self.client_secret,
                scope: self.scope,
            },
            AuthType::BearerToken => AuthConfig::Bearer {
                token: self
                    .bearer_token
                    .ok_or_else(|| Error::missing_field("bearer_token"))?,
            },
            AuthType::Basic => AuthConfig::Basic {
                username: self
                    .username
                    .ok_or_else(|| Error::missing_field("username"))?,
                password: self
                    .password
                    .ok_or_else(|| Error::missing_field("password"))?,
            },
        };
        Ok(auth)
    }
}

/// Transport settings in the YAML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HttpSection {
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    max_retries: Option<u32>,
    #[serde(default)]
    backoff: Option<BackoffType>,
    #[serde(default)]
    initial_backoff_ms: Option<u64>,
    #[serde(default)]
    max_backoff_secs: Option<u64>,
    #[serde(default)]
    rate_limit: Option<RateLimiterConfig>,
    #[serde(default)]
    headers: StringMap,
}

impl HttpSection {
    fn into_http_config(self) -> HttpClientConfig {
        let mut http = HttpClientConfig::default();
        if let Some(secs) = self.timeout_secs {
            http.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = self.max_retries {
            http.max_retries = retries;
        }
        if let Some(backoff) = self.backoff {
            http.backoff_type = backoff;
        }
        if let Some(ms) = self.initial_backoff_ms {
            http.initial_backoff = Duration::from_millis(ms);
        }
        if let Some(secs) = self.max_backoff_secs {
            http.max_backoff = Duration::from_secs(secs);
        }
        http.rate_limit = self.rate_limit;
        http.default_headers = self.headers;
        http
    }
}
