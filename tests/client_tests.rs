//
//  neon-api
//  tests/client_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

mod common;

use mockito::{Matcher, Server};
use neon_api::api::common::{ApiPath, QueryParams};
use neon_api::{ApiError, Method, NeonClient};
use reqwest::StatusCode;
use serial_test::serial;

use common::{bearer, client_for, TEST_KEY};

#[tokio::test]
#[serial]
async fn test_from_env_without_key_is_missing_credential() {
    std::env::remove_var("NEON_API_KEY");

    let err = NeonClient::from_env().unwrap_err();
    assert!(matches!(err, ApiError::MissingCredential));
    assert!(err.to_string().contains("NEON_API_KEY"));
}

#[tokio::test]
#[serial]
async fn test_from_env_with_empty_key_is_missing_credential() {
    std::env::set_var("NEON_API_KEY", "");

    let result = NeonClient::builder().build();
    std::env::remove_var("NEON_API_KEY");

    assert!(matches!(result, Err(ApiError::MissingCredential)));
}

#[tokio::test]
#[serial]
async fn test_env_key_is_sent_as_bearer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/users/me")
        .match_header("authorization", "Bearer napi_from_env")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "u1", "email": "dev@example.com"}"#)
        .create_async()
        .await;

    std::env::set_var("NEON_API_KEY", "napi_from_env");
    let client = NeonClient::builder()
        .base_url(format!("{}/api/v2", server.url()))
        .build();
    std::env::remove_var("NEON_API_KEY");

    let me = client.unwrap().me().await.unwrap();
    assert_eq!(me.id, "u1");
    assert_eq!(me.email.as_deref(), Some("dev@example.com"));
    mock.assert_async().await;
}

#[test]
fn test_explicit_key_with_whitespace_is_rejected() {
    let err = NeonClient::new("napi key").unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredential(_)));
}

#[test]
fn test_debug_output_hides_key() {
    let client = NeonClient::new("napi_very_secret_value").unwrap();
    assert!(!format!("{:?}", client).contains("napi_very_secret_value"));
}

#[tokio::test]
async fn test_headers_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/projects/p1")
        .match_header("authorization", bearer().as_str())
        .match_header("accept", "application/json")
        .match_header(
            "user-agent",
            format!("{}/{}", neon_api::APP_NAME, neon_api::VERSION).as_str(),
        )
        .with_status(200)
        .with_body(r#"{"project": {"id": "p1"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.project("p1").await.unwrap();

    assert_eq!(response.project.id, "p1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/users/me")
        .match_header("user-agent", "deploy-bot/2.1")
        .with_status(200)
        .with_body(r#"{"id": "u1"}"#)
        .create_async()
        .await;

    let client = NeonClient::builder()
        .api_key(TEST_KEY)
        .base_url(format!("{}/api/v2/", server.url()))
        .user_agent("deploy-bot/2.1")
        .build()
        .unwrap();

    client.me().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": "", "message": "project not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.project("missing").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        ApiError::Http {
            status,
            message,
            body,
            ..
        } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "project not found");
            assert!(body.contains("project not found"));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v2/projects/p1")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.project_delete("p1").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    assert!(err.to_string().contains("bad gateway"));
}

#[tokio::test]
async fn test_locked_project() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v2/projects/p1/endpoints/ep-1/start")
        .with_status(423)
        .with_body(r#"{"message": "project already has running operations"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.endpoint_start("p1", "ep-1").await.unwrap_err();
    assert!(err.is_locked());
}

#[tokio::test]
async fn test_empty_identifier_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);

    assert!(matches!(
        client.project("").await,
        Err(ApiError::MissingParameter("project_id"))
    ));
    assert!(matches!(
        client.branch("p1", "   ").await,
        Err(ApiError::MissingParameter("branch_id"))
    ));
    assert!(matches!(
        client.role_password_reveal("p1", "br-1", "").await,
        Err(ApiError::MissingParameter("role_name"))
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_dot_identifiers_never_reach_the_parent_collection() {
    let mut server = Server::new_async().await;
    let collection = server
        .mock("DELETE", "/api/v2/projects/p1/branches")
        .with_status(200)
        .with_body(r#"{"branch": {"id": "wrong"}, "operations": []}"#)
        .expect(0)
        .create_async()
        .await;
    let any = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);

    for branch_id in ["..", "."] {
        let result = client.branch_delete("p1", branch_id).await;
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { name: "branch_id", .. })
        ));
    }
    assert!(matches!(
        client.endpoint_delete("..", "ep-1").await,
        Err(ApiError::InvalidParameter { name: "project_id", .. })
    ));

    collection.assert_async().await;
    any.assert_async().await;
}

#[tokio::test]
async fn test_repeated_reads_issue_one_request_each() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/projects/p1/branches/br-1")
        .with_status(200)
        .with_body(r#"{"branch": {"id": "br-1", "name": "main"}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let first = client.branch("p1", "br-1").await.unwrap();
    let second = client.branch("p1", "br-1").await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/users/me")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    match client.me().await.unwrap_err() {
        ApiError::Decode { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = NeonClient::builder()
        .api_key(TEST_KEY)
        .base_url("http://127.0.0.1:1/api/v2/")
        .build()
        .unwrap();

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.status().is_none());
}

#[test]
fn test_invalid_base_url() {
    let result = NeonClient::builder()
        .api_key(TEST_KEY)
        .base_url("not a url")
        .build();
    assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
}

#[tokio::test]
async fn test_raw_request_escape_hatch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/regions")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_status(200)
        .with_body(r#"{"regions": [{"region_id": "aws-us-east-2"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let raw: serde_json::Value = client
        .request(
            Method::GET,
            &ApiPath::new("regions"),
            &QueryParams::new().push("limit", 5),
            None::<&()>,
        )
        .await
        .unwrap();

    assert_eq!(raw["regions"][0]["region_id"], "aws-us-east-2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_null() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v2/noop")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let raw: serde_json::Value = client.post_empty(&ApiPath::new("noop")).await.unwrap();
    assert!(raw.is_null());
}

#[tokio::test]
async fn test_clones_share_nothing_mutable() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/users/me")
        .with_status(200)
        .with_body(r#"{"id": "u1"}"#)
        .expect(4)
        .create_async()
        .await;

    let client = client_for(&server);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.me().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().id, "u1");
    }
    mock.assert_async().await;
}
