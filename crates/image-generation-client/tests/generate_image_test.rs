//! Integration tests for [`image_generation_client::ImageGenerationClient`] against a mockito server.

use image_generation_client::ImageGenerationClient;
use mockito::{Matcher, Server};
use openai_client::ClientError;
use serde_json::json;

/// **Test: One 512x512 image is requested and its URL returned.**
#[tokio::test]
async fn test_generate_image_returns_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/images/generations")
        .match_body(Matcher::PartialJson(json!({
            "prompt": "a plate of vegetables",
            "n": 1,
            "size": "512x512",
            "model": "dall-e-2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "created": 1_700_000_000,
                "data": [{ "url": "https://images.example/veg.png" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = ImageGenerationClient::with_base_url("sk-test-key-123456".into(), server.url());
    let url = client.generate_image("a plate of vegetables").await.unwrap();

    assert_eq!(url, "https://images.example/veg.png");
    mock.assert_async().await;
}

/// **Test: Over-long prompts reach the API as 997 chars + "...".**
#[tokio::test]
async fn test_generate_image_sends_truncated_prompt() {
    let long_prompt = "z".repeat(1200);
    let expected = format!("{}...", "z".repeat(997));

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/images/generations")
        .match_body(Matcher::PartialJson(json!({ "prompt": expected })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "created": 1, "data": [{ "url": "https://images.example/z.png" }] })
                .to_string(),
        )
        .create_async()
        .await;

    let client = ImageGenerationClient::with_base_url("sk-test-key-123456".into(), server.url());
    client.generate_image(&long_prompt).await.unwrap();

    mock.assert_async().await;
}

/// **Test: An empty data array is a malformed response.**
#[tokio::test]
async fn test_generate_image_without_data_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/images/generations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "created": 1, "data": [] }).to_string())
        .create_async()
        .await;

    let client = ImageGenerationClient::with_base_url("sk-test-key-123456".into(), server.url());
    let err = client.generate_image("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

/// **Test: A rejected prompt surfaces as a classified API error.**
#[tokio::test]
async fn test_generate_image_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/images/generations")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Your request was rejected by the safety system.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "content_policy_violation"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = ImageGenerationClient::with_base_url("sk-test-key-123456".into(), server.url());
    let err = client.generate_image("anything").await.unwrap_err();

    assert!(matches!(err, ClientError::Api { .. }));
}

/// **Test: A 429 rate-limit answer fails at once as ClientError::Api instead of being retried.**
#[tokio::test]
async fn test_generate_image_rate_limit_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/images/generations")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "Rate limit reached for images",
                    "type": "requests",
                    "param": null,
                    "code": "rate_limit_exceeded"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = ImageGenerationClient::with_base_url("sk-test-key-123456".into(), server.url());
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        client.generate_image("a bowl of soup"),
    )
    .await
    .expect("rate-limited request must not back off");

    assert!(matches!(result, Err(ClientError::Api { .. })));
    mock.assert_async().await;
}
