//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chat_share_extractor::{Result, Session};

/// Scripted browser session serving canned HTML snapshots.
///
/// Snapshots are served one per `content` call in order, with the last one
/// repeating forever. Navigations are recorded, and drops are counted so
/// tests can assert the session was released exactly once.
pub struct FakeSession {
    snapshots: Vec<String>,
    served: usize,
    pub navigated: Vec<String>,
    releases: Arc<AtomicUsize>,
}

impl FakeSession {
    /// Session whose rendered document never changes.
    pub fn new(html: &str) -> Self {
        Self::with_snapshots(vec![html.to_string()])
    }

    /// Session whose rendered document changes across polls.
    pub fn with_snapshots(snapshots: Vec<String>) -> Self {
        assert!(!snapshots.is_empty(), "FakeSession needs at least one snapshot");
        Self {
            snapshots,
            served: 0,
            navigated: Vec::new(),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle observing how many times this session was released.
    pub fn release_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.releases)
    }
}

impl Session for FakeSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.navigated.push(url.to_string());
        Ok(())
    }

    fn content(&mut self) -> Result<String> {
        let idx = self.served.min(self.snapshots.len() - 1);
        self.served += 1;
        Ok(self.snapshots[idx].clone())
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Minimal Gemini share page holding the given (user, model) turns.
pub fn gemini_page(turns: &[(&str, &str)]) -> String {
    let mut body = String::from("<div class=\"chat-history\">");
    for (user, model) in turns {
        body.push_str(&format!(
            "<user-query><p>{user}</p></user-query>\
             <response-container><p>{model}</p></response-container>"
        ));
    }
    body.push_str("</div>");
    format!("<html><body>{body}</body></html>")
}

/// Minimal ChatGPT share page from raw article texts.
pub fn chatgpt_page(articles: &[&str]) -> String {
    let mut body = String::from("<div>");
    for text in articles {
        body.push_str(&format!("<article><p>{text}</p></article>"));
    }
    body.push_str("</div>");
    format!("<html><body>{body}</body></html>")
}

/// A page with no chat markup at all, as rendered before content loads.
pub fn blank_page() -> String {
    "<html><body><p>Loading…</p></body></html>".to_string()
}
