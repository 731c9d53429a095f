//! One-call extraction entry points, one per provider.
//!
//! Each call owns its browser session for the duration of the run: the
//! session is launched up front and torn down on every exit path when it
//! drops, success and failure alike.

use std::path::PathBuf;

use crate::browser::ChromeSession;
use crate::error::Result;
use crate::providers::{ChatGptProvider, GeminiProvider, Provider};

use super::extract_chat;

/// Scrape a shared Gemini conversation and save it to disk.
///
/// Falls back to the bundled demo share URL when `share_url` is `None`.
/// Returns the written JSON path and the conversation id.
pub fn extract_gemini_conversation(share_url: Option<&str>) -> Result<(PathBuf, String)> {
    run(&GeminiProvider::new(), share_url)
}

/// Scrape a shared ChatGPT conversation and save it to disk.
///
/// Falls back to the bundled demo share URL when `share_url` is `None`.
/// Returns the written JSON path and the conversation id.
pub fn extract_chatgpt_conversation(share_url: Option<&str>) -> Result<(PathBuf, String)> {
    run(&ChatGptProvider::new(), share_url)
}

fn run(provider: &dyn Provider, share_url: Option<&str>) -> Result<(PathBuf, String)> {
    let url = share_url.unwrap_or(provider.spec().default_share_url.as_str());
    let mut session = ChromeSession::launch()?;
    extract_chat(provider, &mut session, url)
}
