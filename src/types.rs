//! Common types used throughout the Projects SDK
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Dynamically-typed JSON value used for free-form fields such as config
/// inputs and settings.
///
/// string | number | bool | null | ordered list | ordered map. Object keys
/// keep their wire order (`serde_json` is built with `preserve_order`).
pub type AnyValue = serde_json::Value;

/// Ordered map of free-form values (e.g. `inputs`, `settings`)
pub type AnyMap = serde_json::Map<String, AnyValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Auth Type
// ============================================================================

/// Authentication scheme selected through external configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// IAM API key exchanged for a bearer token
    Iam,
    /// Static bearer token
    #[serde(alias = "bearer")]
    BearerToken,
    /// HTTP basic auth
    Basic,
    /// No authentication
    #[default]
    NoAuth,
}

impl FromStr for AuthType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iam" => Ok(Self::Iam),
            "bearertoken" | "bearer" => Ok(Self::BearerToken),
            "basic" => Ok(Self::Basic),
            "noauth" | "none" => Ok(Self::NoAuth),
            other => Err(crate::Error::invalid_value(
                "auth_type",
                format!("unsupported authentication type '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_from_str() {
        assert_eq!("IAM".parse::<AuthType>().unwrap(), AuthType::Iam);
        assert_eq!(
            "bearerToken".parse::<AuthType>().unwrap(),
            AuthType::BearerToken
        );
        assert_eq!("basic".parse::<AuthType>().unwrap(), AuthType::Basic);
        assert_eq!("noauth".parse::<AuthType>().unwrap(), AuthType::NoAuth);
        assert!("kerberos".parse::<AuthType>().is_err());
    }

    #[test]
    fn test_auth_type_serde() {
        let kind: AuthType = serde_yaml::from_str("bearertoken").unwrap();
        assert_eq!(kind, AuthType::BearerToken);

        let json = serde_json::to_string(&AuthType::NoAuth).unwrap();
        assert_eq!(json, "\"noauth\"");
    }

    #[test]
    fn test_any_map_preserves_order() {
        let map: AnyMap = serde_json::from_str(r#"{"zeta": 1, "alpha": [true, null]}"#).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
