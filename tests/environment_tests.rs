//! The crate-level helpers read their configuration from process environment
//! variables, so every test here holds `ENV_LOCK` while it touches them.

use std::sync::{Mutex, MutexGuard};

use promptkit::{CompletionOptions, LlmError, Message, complete, complete_conversation};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn set_env(api_key: Option<&str>, base_url: Option<&str>) {
    // SAFETY: every test in this binary mutates the environment only while holding ENV_LOCK.
    unsafe {
        match api_key {
            Some(key) => std::env::set_var("OPENAI_API_KEY", key),
            None => std::env::remove_var("OPENAI_API_KEY"),
        }
        match base_url {
            Some(url) => std::env::set_var("OPENAI_BASE_URL", url),
            None => std::env::remove_var("OPENAI_BASE_URL"),
        }
        std::env::remove_var("OPENAI_ORGANIZATION");
    }
}

#[tokio::test]
async fn helpers_use_environment_configuration() {
    let _guard = lock_env();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-from-env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-env",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "hello" } }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    set_env(Some("sk-from-env"), Some(&format!("{}/v1", server.uri())));

    let options = CompletionOptions::default();
    let from_prompt = complete("Say hello", &options).await;
    let from_conversation = complete_conversation(&[Message::user("Say hello")], &options).await;

    set_env(None, None);

    assert_eq!(from_prompt.unwrap(), "hello");
    assert_eq!(from_conversation.unwrap(), "hello");

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 2);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["temperature"], json!(0.0));
}

#[tokio::test]
async fn helpers_fail_without_api_key() {
    let _guard = lock_env();
    set_env(None, None);

    let options = CompletionOptions::default();
    let prompt_result = complete("hi", &options).await;
    let conversation_result = complete_conversation(&[Message::user("hi")], &options).await;

    for result in [prompt_result, conversation_result] {
        match result {
            Err(LlmError::ProviderConfiguration(message)) => {
                assert_eq!(message, "OPENAI_API_KEY not set.")
            }
            other => panic!("Expected ProviderConfiguration error, got {:?}", other),
        }
    }
}
