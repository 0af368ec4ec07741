//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → IAM token exchange → list calls
//! → pagers following `next` links

use futures::StreamExt;
use pretty_assertions::assert_eq;
use projects_sdk::http::HttpClientConfig;
use projects_sdk::project::{
    ListConfigsOptions, ListProjectEnvironmentsOptions, ListProjectsOptions, ProjectV1,
};
use projects_sdk::types::BackoffType;
use projects_sdk::{extract_token, AuthConfig, Error, PaginationLink, ProjectV1Config};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_http() -> HttpClientConfig {
    HttpClientConfig::builder()
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(50),
        )
        .build()
}

async fn mount_iam(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn iam_client(api: &MockServer, iam: &MockServer) -> ProjectV1 {
    let auth = AuthConfig::Iam {
        apikey: "test-apikey".to_string(),
        url: iam.uri(),
        client_id: None,
        client_secret: None,
        scope: None,
    };
    let config = ProjectV1Config::new(auth)
        .with_service_url(api.uri())
        .with_http(fast_http());
    ProjectV1::new(config).unwrap()
}

fn config_item(id: &str) -> Value {
    json!({
        "id": id,
        "version": 1,
        "state": "draft",
        "project": { "id": "proj-1" },
        "definition": { "name": format!("config {id}") }
    })
}

// ============================================================================
// Token extraction
// ============================================================================

#[test]
fn test_extract_token_scenarios() {
    let link = PaginationLink::new("ibm.com?token=abc-123");
    assert_eq!(extract_token(Some(&link)).unwrap(), Some("abc-123".to_string()));

    let empty: PaginationLink = serde_json::from_value(json!({})).unwrap();
    assert_eq!(extract_token(Some(&empty)).unwrap(), None);

    let no_query = PaginationLink::new("ibm.com");
    assert_eq!(extract_token(Some(&no_query)).unwrap(), None);

    assert_eq!(extract_token(None).unwrap(), None);
}

// ============================================================================
// Pagers end to end
// ============================================================================

#[tokio::test]
async fn test_configs_pager_with_iam_auth() {
    let iam = MockServer::start().await;
    let api = MockServer::start().await;
    mount_iam(&iam, "iam-access-token").await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/proj-1/configs"))
        .and(header("Authorization", "Bearer iam-access-token"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "first": { "href": format!("{}/v1/projects/proj-1/configs?limit=2", api.uri()) },
            "next": { "href": format!("{}/v1/projects/proj-1/configs?limit=2&token=page%2B2", api.uri()) },
            "configs": [config_item("c1"), config_item("c2")]
        })))
        .expect(1)
        .mount(&api)
        .await;

    // Token values are query-decoded before being sent back
    Mock::given(method("GET"))
        .and(path("/v1/projects/proj-1/configs"))
        .and(header("Authorization", "Bearer iam-access-token"))
        .and(query_param("token", "page+2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "configs": [config_item("c3")]
        })))
        .expect(1)
        .mount(&api)
        .await;

    let client = iam_client(&api, &iam);
    let configs = client
        .configs_pager(ListConfigsOptions::new("proj-1").with_limit(2))
        .unwrap()
        .get_all()
        .await
        .unwrap();

    let ids: Vec<_> = configs.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

#[tokio::test]
async fn test_projects_pager_drains_many_pages() {
    let api = MockServer::start().await;

    for page in 0..4u32 {
        let mut body = json!({
            "limit": 1,
            "projects": [{ "id": format!("p{page}"), "definition": { "name": "n" } }]
        });
        if page < 3 {
            body["next"] = json!({ "href": format!("/v1/projects?token=t{}", page + 1) });
        }

        let mock = Mock::given(method("GET")).and(path("/v1/projects"));
        let mock = if page == 0 {
            mock.and(query_param_is_missing("token"))
        } else {
            mock.and(query_param("token", format!("t{page}")))
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&api)
            .await;
    }

    let config = ProjectV1Config::new(AuthConfig::None)
        .with_service_url(api.uri())
        .with_http(fast_http());
    let client = ProjectV1::new(config).unwrap();

    let mut pager = client.projects_pager(ListProjectsOptions::new()).unwrap();
    let mut ids = Vec::new();
    while pager.has_next() {
        ids.extend(pager.get_next().await.unwrap().into_iter().map(|p| p.id));
    }

    assert_eq!(ids, vec!["p0", "p1", "p2", "p3"]);
    assert_eq!(pager.pages_fetched(), 4);
    assert!(matches!(pager.get_next().await, Err(Error::PagerExhausted)));
}

#[tokio::test]
async fn test_environments_stream_stops_on_malformed_link() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/proj-1/environments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 10,
            "next": { "href": "http://[::1/v1?token=x" },
            "environments": []
        })))
        .expect(1)
        .mount(&api)
        .await;

    let config = ProjectV1Config::new(AuthConfig::None).with_service_url(api.uri());
    let client = ProjectV1::new(config).unwrap();

    let pages: Vec<_> = client
        .project_environments_pager(ListProjectEnvironmentsOptions::new("proj-1"))
        .unwrap()
        .into_stream()
        .collect()
        .await;

    assert_eq!(pages.len(), 1);
    assert!(matches!(pages[0], Err(Error::LinkParse { .. })));
}

#[tokio::test]
async fn test_transient_failures_are_retried_below_the_pager() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&api)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 10,
            "projects": [{ "id": "p1", "definition": { "name": "n" } }]
        })))
        .mount(&api)
        .await;

    let config = ProjectV1Config::new(AuthConfig::None)
        .with_service_url(api.uri())
        .with_http(fast_http());
    let client = ProjectV1::new(config).unwrap();

    let mut pager = client.projects_pager(ListProjectsOptions::new()).unwrap();
    let items = pager.get_next().await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(!pager.has_next());
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_client_from_env_map_with_bearer_token() {
    let api = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .and(header("Authorization", "Bearer static-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 10,
            "projects": []
        })))
        .expect(1)
        .mount(&api)
        .await;

    let vars: HashMap<String, String> = [
        ("PROJECT_URL", api.uri()),
        ("PROJECT_AUTH_TYPE", "bearerToken".to_string()),
        ("PROJECT_BEARER_TOKEN", "static-token".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let client = ProjectV1::new(ProjectV1Config::from_env_map(&vars).unwrap()).unwrap();
    let collection = client.list_projects(&ListProjectsOptions::new()).await.unwrap();
    assert!(collection.projects.is_empty());
}

#[test]
fn test_client_from_yaml() {
    let yaml = r"
service_url: https://projects.example.com/
auth:
  type: iam
  apikey: my-key
http:
  max_retries: 1
  timeout_secs: 5
";
    let config = ProjectV1Config::from_yaml_str(yaml).unwrap();
    assert_eq!(config.http.max_retries, 1);

    let client = ProjectV1::new(config).unwrap();
    assert_eq!(client.service_url().as_str(), "https://projects.example.com/");
}
