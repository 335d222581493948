//! HTTP-level tests for the Gemini client and the fail-soft boundary.

use brief_core::briefing::{BUSY_FALLBACK, BriefRequester, CONNECTION_FALLBACK, fallback_message};
use brief_core::config::Config;
use brief_core::providers::{GeminiClient, GeminiConfig, ProviderErrorKind};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> GeminiClient {
    GeminiClient::new(GeminiConfig {
        api_key: "test-key".to_string(),
        base_url,
        model: "gemini-2.5-flash".to_string(),
        max_output_tokens: None,
    })
}

#[tokio::test]
async fn generate_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "An online gallery" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "# Scope\n- Discovery" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let text = client
        .generate("An online gallery", Some("persona"))
        .await
        .expect("request should succeed");
    assert_eq!(text, "# Scope\n- Discovery");
}

#[tokio::test]
async fn http_error_stays_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "code": 503, "message": "The model is overloaded" }
        })))
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let err = client.generate("idea", None).await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::HttpStatus);
    assert!(err.message.contains("The model is overloaded"));
    assert_eq!(fallback_message(&err), BUSY_FALLBACK);
}

#[tokio::test]
async fn empty_candidates_are_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let err = client.generate("idea", None).await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::Parse);
    assert_eq!(fallback_message(&err), BUSY_FALLBACK);
}

#[tokio::test]
async fn unreachable_host_maps_to_connection_fallback() {
    // Nothing listens on this port; the connection is refused immediately.
    let client = client_for("http://127.0.0.1:9".to_string());
    let err = client.generate("idea", None).await.unwrap_err();
    assert_eq!(err.kind, ProviderErrorKind::Timeout);
    assert_eq!(fallback_message(&err), CONNECTION_FALLBACK);
}

#[tokio::test]
async fn requester_collapses_failure_into_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.providers.gemini.api_key = Some("test-key".to_string());
    config.providers.gemini.base_url = Some(server.uri());

    let requester = BriefRequester::from_config(&config).expect("config should resolve");
    let text = requester.request_or_fallback("An online gallery").await;
    assert_eq!(text, BUSY_FALLBACK);
}

#[tokio::test]
async fn requester_passes_persona_as_system_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "systemInstruction": {
                "parts": [{ "text": brief_core::briefing::merge_system_prompt(None) }]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Hello." }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.providers.gemini.api_key = Some("test-key".to_string());
    config.providers.gemini.base_url = Some(server.uri());

    let requester = BriefRequester::from_config(&config).expect("config should resolve");
    let text = requester
        .request("An online gallery")
        .await
        .expect("request should succeed");
    assert_eq!(text, "Hello.");
}
