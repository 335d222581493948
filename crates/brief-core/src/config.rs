//! Configuration management.
//!
//! Loads configuration from ${BRIEF_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Gemini provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiProviderConfig {
    /// API key; falls back to the GEMINI_API_KEY environment variable.
    pub api_key: Option<String>,
    /// Base URL; falls back to GEMINI_BASE_URL, then the public endpoint.
    pub base_url: Option<String>,
}

/// Provider configuration (keys, base URLs).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub gemini: GeminiProviderConfig,
}

/// Inquiry dispatch destinations. A channel without a destination is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InquiryConfig {
    /// WhatsApp number in international format, digits only (e.g. "4474...").
    pub whatsapp_number: Option<String>,
    /// Destination address for the email compose link.
    pub email: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini model used for brief generation
    pub model: String,

    /// Maximum tokens for responses (optional)
    pub max_output_tokens: Option<u32>,

    /// Optional extra system prompt, appended to the built-in persona
    pub system_prompt: Option<String>,

    /// Provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Inquiry dispatch configuration
    #[serde(default)]
    pub inquiry: InquiryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            max_output_tokens: None,
            system_prompt: None,
            providers: ProvidersConfig::default(),
            inquiry: InquiryConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// # Errors
    /// Fails if a config file already exists (no silent overwrite).
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for configuration and data directories.
    //!
    //! BRIEF_HOME resolution order:
    //! 1. BRIEF_HOME environment variable (if set)
    //! 2. ~/.config/brief (default)

    use std::path::PathBuf;

    /// Returns the brief home directory.
    pub fn brief_home() -> PathBuf {
        if let Ok(home) = std::env::var("BRIEF_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("brief"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        brief_home().join("config.toml")
    }
}
