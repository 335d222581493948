//! Gemini API client (Generative Language API, non-streaming).

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::debug;

use super::{
    ProviderError, ProviderResult, classify_reqwest_error, resolve_api_key, resolve_base_url,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: Option<u32>,
}

impl GeminiConfig {
    /// Creates a new config from environment.
    ///
    /// Authentication resolution order:
    /// 1. `config_api_key` parameter (from config file)
    /// 2. `GEMINI_API_KEY` environment variable
    ///
    /// Base URL resolution order: `GEMINI_BASE_URL` env, config, default.
    ///
    /// # Errors
    /// Returns an error if no API key is available or a URL is malformed.
    pub fn from_env(
        model: String,
        max_output_tokens: Option<u32>,
        config_base_url: Option<&str>,
        config_api_key: Option<&str>,
    ) -> Result<Self> {
        let api_key = resolve_api_key(config_api_key, "GEMINI_API_KEY", "gemini")?;
        let base_url = resolve_base_url(
            config_base_url,
            "GEMINI_BASE_URL",
            DEFAULT_BASE_URL,
            "Gemini",
        )?;

        Ok(Self {
            api_key,
            base_url,
            model,
            max_output_tokens,
        })
    }
}

/// Gemini client.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Sends one generateContent request and returns the response text.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] on transport failure, non-success status,
    /// or a response body with no text parts.
    pub async fn generate(&self, query: &str, system: Option<&str>) -> ProviderResult<String> {
        let request = build_generate_request(query, system, self.config.max_output_tokens);
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .headers(build_headers(&self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ProviderError::http_status(status.as_u16(), &body));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::parse(format!("Invalid response JSON: {e}")))?;
        parse_generate_response(&value)
    }
}

fn build_generate_request(query: &str, system: Option<&str>, max_output_tokens: Option<u32>) -> Value {
    let mut request = json!({
        "contents": [{
            "role": "user",
            "parts": [{
                "text": query
            }]
        }],
    });

    if let Some(system) = system
        && !system.trim().is_empty()
    {
        request["systemInstruction"] = json!({
            "parts": [{ "text": system }]
        });
    }

    if let Some(max) = max_output_tokens {
        request["generationConfig"] = json!({ "maxOutputTokens": max });
    }

    request
}

/// Extracts the text parts of the first candidate.
fn parse_generate_response(value: &Value) -> ProviderResult<String> {
    let parts = value
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let text: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .filter(|text| !text.trim().is_empty())
        .collect();

    if text.is_empty() {
        return Err(ProviderError::parse(
            "Response contains no text candidates",
        ));
    }

    Ok(text.join(""))
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert(
        "user-agent",
        HeaderValue::from_static(super::USER_AGENT),
    );
    headers
}
