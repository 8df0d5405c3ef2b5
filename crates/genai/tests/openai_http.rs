//! `OpenAiProvider` against a mock OpenAI-compatible server.

use adsmith_genai::{GenerationProvider, OpenAiConfig, OpenAiProvider, ProviderError};
use assert_matches::assert_matches;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenAiProvider {
    let mut config = OpenAiConfig::with_api_key("sk-test");
    config.base_url = format!("{}/v1", server.uri());
    OpenAiProvider::with_client(reqwest::Client::new(), config)
}

// ---------------------------------------------------------------------------
// Chat completions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_json_sends_json_mode_request_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "{\"headlines\": []}"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let content = provider_for(&server)
        .complete_json("system text", "user text")
        .await
        .unwrap();
    assert_eq!(content, r#"{"headlines": []}"#);

    let request = &server.received_requests().await.unwrap()[0];
    let body: Value = request.body_json().unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["response_format"], json!({"type": "json_object"}));
    assert_eq!(body["messages"][0], json!({"role": "system", "content": "system text"}));
    assert_eq!(body["messages"][1], json!({"role": "user", "content": "user text"}));
}

#[tokio::test]
async fn complete_json_without_content_falls_back_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": null}}]
        })))
        .mount(&server)
        .await;

    let content = provider_for(&server).complete_json("s", "u").await.unwrap();
    assert_eq!(content, "{}");
}

#[tokio::test]
async fn complete_json_with_no_choices_falls_back_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let content = provider_for(&server).complete_json("s", "u").await.unwrap();
    assert_eq!(content, "{}");
}

#[tokio::test]
async fn rate_limited_completion_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete_json("s", "u")
        .await
        .unwrap_err();
    assert_matches!(err, ProviderError::ApiError { status: 429, ref body } if body == "slow down");
    assert_eq!(err.to_string(), "Provider API error (429): slow down");
}

#[tokio::test]
async fn non_json_completion_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("gateway says hi"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete_json("s", "u")
        .await
        .unwrap_err();
    assert_matches!(err, ProviderError::Decode(_));
}

// ---------------------------------------------------------------------------
// Image generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_image_requests_one_image_at_configured_size() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"url": "https://cdn.example/a.png"}, {"url": "https://cdn.example/b.png"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = provider_for(&server)
        .generate_image("a beach at dusk")
        .await
        .unwrap();
    assert_eq!(url.as_deref(), Some("https://cdn.example/a.png"));

    let request = &server.received_requests().await.unwrap()[0];
    let body: Value = request.body_json().unwrap();
    assert_eq!(
        body,
        json!({
            "model": "dall-e-3",
            "prompt": "a beach at dusk",
            "size": "1024x1024",
            "n": 1
        })
    );
}

#[tokio::test]
async fn generate_image_without_url_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{}]})))
        .mount(&server)
        .await;

    let url = provider_for(&server).generate_image("p").await.unwrap();
    assert_eq!(url, None);
}

#[tokio::test]
async fn rejected_image_prompt_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error":{"code":"content_policy_violation"}}"#),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server).generate_image("p").await.unwrap_err();
    assert_matches!(err, ProviderError::ApiError { status: 400, ref body } if body.contains("content_policy"));
}
