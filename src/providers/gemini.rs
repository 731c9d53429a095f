//! Shared Gemini conversation pages.

use std::path::PathBuf;

use scraper::{Html, Selector};

use super::{Provider, ProviderSpec};

const DEFAULT_SHARE_URL: &str = "https://gemini.google.com/share/e230b881ff8d";
const DATA_DIR: &str = "gemini_convo_data";
const FILE_PREFIX: &str = "gemini_conversation";

/// Extractor capabilities for Gemini share pages.
///
/// Readiness keys off the `div.chat-history` container. User turns are
/// `user-query` elements and model turns are `response-container`
/// elements; each set is already in document order.
pub struct GeminiProvider {
    spec: ProviderSpec,
    chat_history: Selector,
    user_query: Selector,
    response_container: Selector,
}

impl GeminiProvider {
    pub fn new() -> Self {
        Self {
            spec: ProviderSpec {
                default_share_url: DEFAULT_SHARE_URL.to_string(),
                data_dir: PathBuf::from(DATA_DIR),
                file_prefix: FILE_PREFIX.to_string(),
                title: "Shared Gemini Conversation".to_string(),
                model_display_name: "Gemini".to_string(),
            },
            chat_history: Selector::parse("div.chat-history").expect("valid selector"),
            user_query: Selector::parse("user-query").expect("valid selector"),
            response_container: Selector::parse("response-container").expect("valid selector"),
        }
    }

    /// Write exports to `data_dir` instead of the default directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.spec.data_dir = data_dir.into();
        self
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for GeminiProvider {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn is_ready(&self, document: &Html) -> bool {
        document.select(&self.chat_history).next().is_some()
    }

    fn parse_messages(&self, document: &Html) -> (Vec<String>, Vec<String>) {
        let user_chat = document
            .select(&self.user_query)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();
        let model_chat = document
            .select(&self.response_container)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();

        (user_chat, model_chat)
    }
}
