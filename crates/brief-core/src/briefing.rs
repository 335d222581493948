//! Brief requester: a thin facade over the Gemini client with the
//! fail-soft boundary the display layer consumes.
//!
//! Failures stay typed ([`ProviderError`]) through the library so tests can
//! assert on the error path; [`BriefRequester::request_or_fallback`] is the
//! single place they collapse into user-facing text.

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::prompts::BRIEF_SYSTEM_PROMPT;
use crate::providers::{GeminiClient, GeminiConfig, ProviderError, ProviderErrorKind, ProviderResult};

/// Fallback shown when the provider answers but the request cannot be served.
pub const BUSY_FALLBACK: &str =
    "Our consultants are currently busy. Please try again shortly.";

/// Fallback shown when the provider cannot be reached at all.
pub const CONNECTION_FALLBACK: &str = "Connection error. Please check your network.";

/// Merges the built-in brief persona with an optional caller prompt.
pub fn merge_system_prompt(extra: Option<&str>) -> String {
    let base = BRIEF_SYSTEM_PROMPT.trim();
    match extra {
        Some(prompt) if !prompt.trim().is_empty() => {
            format!("{}\n\n{}", base, prompt.trim())
        }
        _ => base.to_string(),
    }
}

/// Maps a provider error onto one of the two fixed fallback strings.
///
/// Transport-level failures (timeouts, refused connections) read as a
/// network problem; everything else reads as the service being busy.
pub fn fallback_message(error: &ProviderError) -> &'static str {
    match error.kind {
        ProviderErrorKind::Timeout => CONNECTION_FALLBACK,
        ProviderErrorKind::HttpStatus | ProviderErrorKind::Parse | ProviderErrorKind::ApiError => {
            BUSY_FALLBACK
        }
    }
}

/// Sends brief-generation requests with a fixed persona.
pub struct BriefRequester {
    client: GeminiClient,
    system_prompt: String,
}

impl BriefRequester {
    /// Builds a requester from configuration.
    ///
    /// # Errors
    /// Returns an error if no API key can be resolved.
    pub fn from_config(config: &Config) -> Result<Self> {
        let gemini = GeminiConfig::from_env(
            config.model.clone(),
            config.max_output_tokens,
            config.providers.gemini.base_url.as_deref(),
            config.providers.gemini.api_key.as_deref(),
        )?;
        Ok(Self {
            client: GeminiClient::new(gemini),
            system_prompt: merge_system_prompt(config.system_prompt.as_deref()),
        })
    }

    /// Requests a brief for the given query, keeping failures typed.
    ///
    /// Callers must pass a trimmed, non-empty query; empty input is expected
    /// to short-circuit before this call (no request is ever sent for it).
    ///
    /// # Errors
    /// Returns a [`ProviderError`] on transport, status, or parse failure.
    pub async fn request(&self, query: &str) -> ProviderResult<String> {
        let text = self
            .client
            .generate(query, Some(&self.system_prompt))
            .await?;
        info!(chars = text.len(), "brief generated");
        Ok(text)
    }

    /// Requests a brief, collapsing any failure into fallback text.
    ///
    /// This is the display-layer contract: it always resolves to text and
    /// never raises, even when the provider is unreachable.
    pub async fn request_or_fallback(&self, query: &str) -> String {
        match self.request(query).await {
            Ok(text) => text,
            Err(error) => {
                warn!(kind = %error.kind, error = %error, "brief request failed");
                fallback_message(&error).to_string()
            }
        }
    }
}
