//! Provider-specific readiness detection and share-page parsing.
//!
//! Share pages render heterogeneous, unstable HTML, so each supported
//! provider supplies the one genuinely provider-specific capability pair:
//!
//! - **readiness**: is the chat markup present in a rendered snapshot yet?
//! - **parsing**: split the snapshot into user and model message lists.
//!
//! Everything else in the extraction lifecycle is shared. Adding a
//! provider means implementing [`Provider`] in a new module here; the
//! orchestrator, path allocator, and record builder stay untouched.

pub mod chatgpt;
pub mod gemini;

use std::path::PathBuf;

use scraper::Html;

pub use chatgpt::ChatGptProvider;
pub use gemini::GeminiProvider;

/// Fixed per-provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderSpec {
    /// Demo share URL used when the caller supplies none.
    pub default_share_url: String,
    /// Directory conversation files are written to.
    pub data_dir: PathBuf,
    /// Filename prefix for `{prefix}_NNN.json` outputs.
    pub file_prefix: String,
    /// Record title.
    pub title: String,
    /// Display name of the model agent in the record.
    pub model_display_name: String,
}

/// The capability pair a provider has to supply.
pub trait Provider {
    /// Static configuration for this provider.
    fn spec(&self) -> &ProviderSpec;

    /// True once the provider's chat markup is present in `document`.
    fn is_ready(&self, document: &Html) -> bool;

    /// Split `document` into user and model message texts, each list in
    /// document order and whitespace-trimmed. Zero matches is a valid
    /// empty result, not an error.
    fn parse_messages(&self, document: &Html) -> (Vec<String>, Vec<String>);
}
