//! Inquiry capture and dual-channel dispatch.
//!
//! An [`Inquiry`] is delivered as human-readable text over two independent
//! notification channels: a WhatsApp deep link and an email compose link.
//! Dispatch is fire-and-forget: a failure on one channel is logged and does
//! not block the other, and no delivery confirmation exists. Callers show an
//! optimistic confirmation regardless of downstream outcome.

use anyhow::{Context, Result};
use tracing::{info, warn};
use url::Url;

use crate::config::InquiryConfig;

/// A structured lead-capture record. All fields required except `phone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub details: String,
}

impl Inquiry {
    /// Checks required-field presence (trimmed non-emptiness). This is the
    /// only validation the capture boundary performs.
    ///
    /// # Errors
    /// Returns an error naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("category", &self.category),
            ("details", &self.details),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("inquiry field '{field}' is required");
            }
        }
        Ok(())
    }

    fn phone_display(&self) -> &str {
        self.phone.as_deref().filter(|p| !p.trim().is_empty()).unwrap_or("Not provided")
    }

    /// Plain-text summary for the WhatsApp channel.
    pub fn whatsapp_text(&self) -> String {
        format!(
            "New inquiry\n\nName: {}\nEmail: {}\nPhone: {}\nCategory: {}\nDetails: {}",
            self.name.trim(),
            self.email.trim(),
            self.phone_display(),
            self.category.trim(),
            self.details.trim(),
        )
    }

    /// Subject line for the email channel.
    pub fn email_subject(&self) -> String {
        format!("New inquiry - {} ({})", self.name.trim(), self.category.trim())
    }

    /// Plain-text body for the email channel.
    pub fn email_body(&self) -> String {
        format!(
            "New inquiry received:\n\nName: {}\nEmail: {}\nPhone: {}\nCategory: {}\n\nDetails:\n{}\n\n-- brief concierge",
            self.name.trim(),
            self.email.trim(),
            self.phone_display(),
            self.category.trim(),
            self.details.trim(),
        )
    }

    /// Builds the `https://wa.me/<number>?text=..` deep link.
    ///
    /// # Errors
    /// Returns an error if the configured number contains no digits.
    pub fn whatsapp_url(&self, number: &str) -> Result<Url> {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            anyhow::bail!("WhatsApp number '{number}' contains no digits");
        }
        Url::parse_with_params(
            &format!("https://wa.me/{digits}"),
            [("text", self.whatsapp_text())],
        )
        .context("build WhatsApp URL")
    }

    /// Builds the `mailto:<to>?subject=..&body=..` compose link.
    ///
    /// # Errors
    /// Returns an error if the destination address does not form a valid URL.
    pub fn mailto_url(&self, to: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("mailto:{}", to.trim()))
            .with_context(|| format!("build mailto URL for '{to}'"))?;
        url.query_pairs_mut()
            .append_pair("subject", &self.email_subject())
            .append_pair("body", &self.email_body())
            .finish();
        Ok(url)
    }

    /// Resolves the configured channel URLs, skipping unset destinations.
    ///
    /// # Errors
    /// Returns an error if a configured destination is unusable.
    pub fn channel_urls(&self, channels: &InquiryConfig) -> Result<Vec<(&'static str, Url)>> {
        let mut urls = Vec::new();
        if let Some(number) = channels.whatsapp_number.as_deref()
            && !number.trim().is_empty()
        {
            urls.push(("whatsapp", self.whatsapp_url(number)?));
        }
        if let Some(to) = channels.email.as_deref()
            && !to.trim().is_empty()
        {
            urls.push(("email", self.mailto_url(to)?));
        }
        Ok(urls)
    }

    /// Hands each channel URL to the OS, fire-and-forget.
    ///
    /// A launch failure is logged at warn and does not block the remaining
    /// channel; no acknowledgement is awaited.
    ///
    /// # Errors
    /// Returns an error only when no channel is configured at all.
    pub fn dispatch(&self, channels: &InquiryConfig) -> Result<()> {
        let urls = self.channel_urls(channels)?;
        if urls.is_empty() {
            anyhow::bail!(
                "no inquiry channels configured; set inquiry.whatsapp_number or inquiry.email"
            );
        }
        for (channel, url) in urls {
            match open::that_detached(url.as_str()) {
                Ok(()) => info!(channel, "inquiry dispatched"),
                Err(error) => warn!(channel, %error, "inquiry dispatch failed"),
            }
        }
        Ok(())
    }

    /// Optimistic local confirmation, shown regardless of delivery outcome.
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you {}! Our concierge will contact you within 24 hours.",
            self.name.trim()
        )
    }
}
