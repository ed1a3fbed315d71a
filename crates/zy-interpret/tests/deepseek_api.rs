//! Integration tests for the DeepSeek client against a local mock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zy_interpret::{DeepSeekClient, InterpretError, Interpreter, SYSTEM_PROMPT};

fn client_for(server: &MockServer) -> DeepSeekClient {
    DeepSeekClient::new("test-key")
        .unwrap()
        .with_endpoint(format!("{}/chat/completions", server.uri()))
}

#[tokio::test]
async fn successful_interpretation_returns_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "deepseek-chat",
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "### 1. 卦象全解\n乾卦象天，自强不息。\n"
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client.interpret("测试提示词").await.unwrap();
    assert_eq!(text, "### 1. 卦象全解\n乾卦象天，自强不息。");
}

#[tokio::test]
async fn request_carries_system_and_user_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": "测试提示词" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.interpret("测试提示词").await.unwrap();
}

#[tokio::test]
async fn server_error_surfaces_single_status_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream busy"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.interpret("测试提示词").await.unwrap_err();
    match err {
        InterpretError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream busy");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.interpret("测试提示词").await.unwrap_err();
    assert!(matches!(err, InterpretError::MalformedResponse(_)));
}

#[tokio::test]
async fn empty_choices_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.interpret("测试提示词").await.unwrap_err();
    assert!(matches!(err, InterpretError::MalformedResponse(_)));
}

#[tokio::test]
async fn retry_after_failure_can_succeed() {
    // The client never retries on its own; the caller re-invokes manually.
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "第二次成功" } }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.interpret("测试提示词").await.is_err());
    let text = client.interpret("测试提示词").await.unwrap();
    assert_eq!(text, "第二次成功");
}
