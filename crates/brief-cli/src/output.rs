//! Plain-text presenter for rendered documents.
//!
//! The renderer's display surface is intentionally external to its contract;
//! this is the CLI's minimal mapping of block kinds to terminal text.

use brief_core::render::{Block, HeadingLevel};

/// Prints a rendered document to stdout.
pub fn print_document(blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading { level, text } => print_heading(*level, text),
            Block::List { items } => {
                for item in items {
                    println!("  \u{2022} {item}");
                }
                println!();
            }
            Block::Paragraph { text } => {
                println!("{text}");
                println!();
            }
            Block::Raw { text } => println!("{text}"),
        }
    }
}

fn print_heading(level: HeadingLevel, text: &str) {
    match level {
        HeadingLevel::Title => {
            println!("{text}");
            println!("{}", "=".repeat(text.chars().count().max(1)));
        }
        HeadingLevel::Section => {
            println!("{text}");
            println!("{}", "-".repeat(text.chars().count().max(1)));
        }
        HeadingLevel::Detail => println!("{text}:"),
    }
    println!();
}
