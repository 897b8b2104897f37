// ABOUTME: Integration tests for the chat completion client against a mock endpoint
// ABOUTME: Verifies request shape, reply extraction and error mapping

use folio_ai::{AIService, AIServiceConfig, AIServiceError, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer, api_key: Option<&str>) -> AIService {
    AIService::new(AIServiceConfig {
        api_key: api_key.map(str::to_string),
        base_url: server.uri(),
        ..AIServiceConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_complete_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4.1-nano",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"text\": \"hi\"}"}}
            ],
            "usage": {"prompt_tokens": 5, "completion_tokens": 3, "total_tokens": 8}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, Some("sk-test"));
    let response = service.generate_text("hello".to_string()).await.unwrap();

    assert_eq!(response.data, "{\"text\": \"hi\"}");
    assert_eq!(response.usage.total_tokens(), 8);
}

#[tokio::test]
async fn test_missing_api_key_fails_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service_for(&server, None)
        .complete("hello".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AIServiceError::NoApiKey));
}

#[tokio::test]
async fn test_error_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = service_for(&server, Some("sk-test"))
        .complete("hello".to_string())
        .await
        .unwrap_err();

    match err {
        AIServiceError::ApiError(message) => assert!(message.contains("overloaded")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_choices_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = service_for(&server, Some("sk-test"))
        .complete("hello".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AIServiceError::InvalidResponse));
}
