//! Core brief library (renderer, requester, inquiry capture, config).

pub mod briefing;
pub mod config;
pub mod inquiry;
pub mod logging;
pub mod prompts;
pub mod providers;
pub mod render;
