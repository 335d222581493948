//! Render command handler.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use brief_core::render;

use crate::output;

/// Renders brief markup from a file (or stdin) to the terminal.
pub fn run(file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    output::print_document(&render::render(&raw));
    Ok(())
}
