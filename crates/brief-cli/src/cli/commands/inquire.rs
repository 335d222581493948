//! Inquire command handler.

use anyhow::{Context, Result};
use brief_core::config::InquiryConfig;
use brief_core::inquiry::Inquiry;

/// Validates and dispatches an inquiry.
///
/// Dispatch is fire-and-forget over the configured channels; the printed
/// confirmation is optimistic and does not reflect delivery outcome.
pub fn run(inquiry: &Inquiry, channels: &InquiryConfig, dry_run: bool) -> Result<()> {
    inquiry.validate().context("validate inquiry")?;

    if dry_run {
        for (channel, url) in inquiry.channel_urls(channels)? {
            println!("{channel}: {url}");
        }
        return Ok(());
    }

    inquiry.dispatch(channels).context("dispatch inquiry")?;
    println!("{}", inquiry.confirmation());
    Ok(())
}
