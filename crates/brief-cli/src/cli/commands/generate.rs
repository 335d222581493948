//! Generate command handler.

use anyhow::{Context, Result};
use brief_core::briefing::BriefRequester;
use brief_core::config::Config;
use brief_core::render;

use crate::output;

/// Requests a brief and prints it.
///
/// Empty input short-circuits before any network call. Request failures are
/// collapsed into fallback text here, at the display boundary; the command
/// itself only fails on configuration problems.
pub async fn run(prompt: &str, config: &Config, raw: bool) -> Result<()> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        anyhow::bail!("prompt is empty; describe the business idea to scope");
    }

    let requester = BriefRequester::from_config(config).context("configure brief requester")?;
    let text = requester.request_or_fallback(prompt).await;

    if raw {
        println!("{text}");
    } else {
        output::print_document(&render::render(&text));
    }
    Ok(())
}
