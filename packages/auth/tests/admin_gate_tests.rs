// ABOUTME: Integration tests for the admin gate against a mock identity provider
// ABOUTME: Covers allow-listed, unlisted, unconfirmed, invalid-token and provider-error cases

use folio_auth::{AdminAllowList, AdminGate, AdminVerifier, IdentityClient, IdentityConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gate_for(server: &MockServer, admins: &str) -> AdminGate {
    let identity = IdentityClient::new(IdentityConfig {
        url: server.uri(),
        anon_key: "anon-key".to_string(),
        timeout: None,
    })
    .unwrap();
    AdminGate::new(AdminAllowList::from_env_value(admins), Some(identity))
}

async fn mount_user(server: &MockServer, token: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_listed_confirmed_email_is_admin() {
    let server = MockServer::start().await;
    mount_user(
        &server,
        "good-token",
        json!({"id": "u1", "email": "Admin@Example.com", "email_confirmed_at": "2025-01-01T00:00:00Z"}),
    )
    .await;

    let gate = gate_for(&server, "admin@example.com");
    let verification = gate.verify("good-token").await;

    assert!(verification.is_admin);
    assert_eq!(verification.email.as_deref(), Some("Admin@Example.com"));
}

#[tokio::test]
async fn test_unlisted_email_is_not_admin() {
    let server = MockServer::start().await;
    mount_user(
        &server,
        "visitor-token",
        json!({"id": "u2", "email": "visitor@example.com", "email_confirmed_at": "2025-01-01T00:00:00Z"}),
    )
    .await;

    let gate = gate_for(&server, "admin@example.com");
    let verification = gate.verify("visitor-token").await;

    assert!(!verification.is_admin);
    assert_eq!(verification.email.as_deref(), Some("visitor@example.com"));
}

#[tokio::test]
async fn test_unconfirmed_email_is_not_admin() {
    let server = MockServer::start().await;
    mount_user(
        &server,
        "fresh-token",
        json!({"id": "u3", "email": "admin@example.com", "email_confirmed_at": null}),
    )
    .await;

    assert!(!gate_for(&server, "admin@example.com").is_admin("fresh-token").await);
}

#[tokio::test]
async fn test_invalid_token_is_not_admin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "invalid JWT"})))
        .mount(&server)
        .await;

    assert!(!gate_for(&server, "admin@example.com").is_admin("expired").await);
}

#[tokio::test]
async fn test_provider_error_is_not_admin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;

    assert!(!gate_for(&server, "admin@example.com").is_admin("token").await);
}

#[tokio::test]
async fn test_garbage_user_payload_is_not_admin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert!(!gate_for(&server, "admin@example.com").is_admin("token").await);
}

#[tokio::test]
async fn test_login_link_sent_only_to_allow_listed_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/otp"))
        .and(query_param("redirect_to", "https://folio.example.com"))
        .and(body_partial_json(json!({"email": "admin@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let gate = gate_for(&server, "admin@example.com")
        .with_redirect(Some("https://folio.example.com".to_string()));

    gate.send_login_link(" admin@example.com ").await.unwrap();
    assert!(gate.send_login_link("visitor@example.com").await.is_err());
}
