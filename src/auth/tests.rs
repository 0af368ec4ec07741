//! Tests for the auth module

use super::*;
use crate::error::Error;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn iam_config(server: &MockServer, apikey: &str) -> AuthConfig {
    AuthConfig::Iam {
        apikey: apikey.to_string(),
        url: server.uri(),
        client_id: None,
        client_secret: None,
        scope: None,
    }
}

async fn authorization_header(auth: &Authenticator) -> String {
    let client = reqwest::Client::new();
    let req = auth
        .apply(client.get("https://projects.example.com/v1/projects"))
        .await
        .unwrap();
    let built = req.build().unwrap();
    built
        .headers()
        .get("Authorization")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = auth
        .apply(client.get("https://projects.example.com/v1/projects"))
        .await
        .unwrap();

    assert!(req.build().unwrap().headers().get("Authorization").is_none());
}

#[tokio::test]
async fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "user".to_string(),
        password: "pass".to_string(),
    });

    // "user:pass" in base64
    assert_eq!(authorization_header(&auth).await, "Basic dXNlcjpwYXNz");
}

#[tokio::test]
async fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::Bearer {
        token: "my-bearer-token".to_string(),
    });

    assert_eq!(authorization_header(&auth).await, "Bearer my-bearer-token");
}

#[tokio::test]
async fn test_iam_token_exchange() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .and(body_string_contains(
            "grant_type=urn%3Aibm%3Aparams%3Aoauth%3Agrant-type%3Aapikey",
        ))
        .and(body_string_contains("apikey=my-api-key"))
        .and(body_string_contains("response_type=cloud_iam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "iam-token-123",
            "refresh_token": "not-used",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_700_000_000
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server, "my-api-key"));

    assert_eq!(authorization_header(&auth).await, "Bearer iam-token-123");
}

#[tokio::test]
async fn test_iam_client_credentials_and_scope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        // "bx:bx" in base64
        .and(header("Authorization", "Basic Yng6Yng="))
        .and(body_string_contains("scope=projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "scoped-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(AuthConfig::Iam {
        apikey: "key".to_string(),
        url: format!("{}/", mock_server.uri()),
        client_id: Some("bx".to_string()),
        client_secret: Some("bx".to_string()),
        scope: Some("projects".to_string()),
    });

    assert_eq!(auth.token().await.unwrap(), "scoped-token");
}

#[tokio::test]
async fn test_iam_token_caching() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "cached-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server, "key"));

    for _ in 0..3 {
        assert_eq!(auth.token().await.unwrap(), "cached-token");
    }
}

#[tokio::test]
async fn test_iam_stale_token_is_refreshed() {
    let mock_server = MockServer::start().await;

    // A zero lifetime makes every cached token stale
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "short-lived",
            "expires_in": 0
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server, "key"));

    auth.token().await.unwrap();
    auth.token().await.unwrap();
}

#[tokio::test]
async fn test_iam_clear_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server, "key"));

    auth.token().await.unwrap();
    auth.clear_cache().await;
    auth.token().await.unwrap();
}

#[tokio::test]
async fn test_iam_token_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errorCode": "BXNIM0415E",
            "errorMessage": "Provided API key could not be found."
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server, "bad-key"));
    let err = auth.token().await.unwrap_err();

    match err {
        Error::TokenRefresh { message } => {
            assert!(message.contains("400"));
            assert!(message.contains("Provided API key could not be found."));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_token_without_iam_config() {
    let auth = Authenticator::new(AuthConfig::Bearer {
        token: "static".to_string(),
    });

    let err = auth.token().await.unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}

#[tokio::test]
async fn test_iam_huge_expires_in_is_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "long-lived",
            "expires_in": 20_000_000_000_000_i64
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(iam_config(&mock_server, "key"));

    assert_eq!(auth.token().await.unwrap(), "long-lived");
    assert_eq!(auth.token().await.unwrap(), "long-lived");
}
