//! Shared ChatGPT conversation pages.

use std::path::PathBuf;

use scraper::{Html, Selector};

use super::{Provider, ProviderSpec};

const DEFAULT_SHARE_URL: &str = "https://chatgpt.com/share/69216b86-6864-8009-96f5-5d5ee0f9cdb1";
const DATA_DIR: &str = "gpt_convo_data";
const FILE_PREFIX: &str = "gpt_conversation";

// Literal labels ChatGPT renders ahead of each turn's text.
const USER_LABEL: &str = "You said:";
const MODEL_LABEL: &str = "ChatGPT said:";

/// Extractor capabilities for ChatGPT share pages.
///
/// ChatGPT share markup carries no stable per-role containers, so turns
/// are recovered from `article` blocks in document order and classified by
/// the literal label each block starts with. Blocks carrying neither label
/// (banners, disclaimers) are dropped.
pub struct ChatGptProvider {
    spec: ProviderSpec,
    chat_root: Selector,
    articles: Selector,
}

impl ChatGptProvider {
    pub fn new() -> Self {
        Self {
            spec: ProviderSpec {
                default_share_url: DEFAULT_SHARE_URL.to_string(),
                data_dir: PathBuf::from(DATA_DIR),
                file_prefix: FILE_PREFIX.to_string(),
                title: "Shared ChatGPT Conversation".to_string(),
                model_display_name: "ChatGPT".to_string(),
            },
            chat_root: Selector::parse("div>article").expect("valid selector"),
            articles: Selector::parse("article").expect("valid selector"),
        }
    }

    /// Write exports to `data_dir` instead of the default directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.spec.data_dir = data_dir.into();
        self
    }
}

impl Default for ChatGptProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for ChatGptProvider {
    fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn is_ready(&self, document: &Html) -> bool {
        document.select(&self.chat_root).next().is_some()
    }

    fn parse_messages(&self, document: &Html) -> (Vec<String>, Vec<String>) {
        let mut user_chat = Vec::new();
        let mut model_chat = Vec::new();

        for article in document.select(&self.articles) {
            let text = article.text().collect::<String>();
            let text = text.trim();

            if let Some(rest) = text.strip_prefix(USER_LABEL) {
                user_chat.push(rest.trim().to_string());
            } else if let Some(rest) = text.strip_prefix(MODEL_LABEL) {
                model_chat.push(rest.trim().to_string());
            }
        }

        (user_chat, model_chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    fn articles_page(texts: &[&str]) -> Html {
        let mut body = String::from("<div>");
        for text in texts {
            body.push_str(&format!("<article><p>{text}</p></article>"));
        }
        body.push_str("</div>");
        page(&body)
    }

    #[test]
    fn test_not_ready_without_articles() {
        let provider = ChatGptProvider::new();
        assert!(!provider.is_ready(&page("<p>Just a moment…</p>")));
    }

    #[test]
    fn test_readiness_requires_article_under_div() {
        let provider = ChatGptProvider::new();
        // An article that is not a div child does not count as chat markup.
        assert!(!provider.is_ready(&page("<article>stray</article>")));
        assert!(provider.is_ready(&page("<div><article>turn</article></div>")));
    }

    #[test]
    fn test_classifies_articles_by_leading_label() {
        let provider = ChatGptProvider::new();
        let doc = articles_page(&["You said: hi", "ChatGPT said: hello", "random text"]);

        let (user, model) = provider.parse_messages(&doc);

        assert_eq!(user, vec!["hi"]);
        assert_eq!(model, vec!["hello"]);
    }

    #[test]
    fn test_label_and_content_whitespace_is_trimmed() {
        let provider = ChatGptProvider::new();
        let doc = articles_page(&["  You said:   spaced out  ", "ChatGPT said:\nanswer line"]);

        let (user, model) = provider.parse_messages(&doc);

        assert_eq!(user, vec!["spaced out"]);
        assert_eq!(model, vec!["answer line"]);
    }

    #[test]
    fn test_turns_keep_document_order() {
        let provider = ChatGptProvider::new();
        let doc = articles_page(&[
            "You said: one",
            "ChatGPT said: first",
            "You said: two",
            "ChatGPT said: second",
        ]);

        let (user, model) = provider.parse_messages(&doc);

        assert_eq!(user, vec!["one", "two"]);
        assert_eq!(model, vec!["first", "second"]);
    }

    #[test]
    fn test_page_of_unlabeled_articles_parses_empty() {
        let provider = ChatGptProvider::new();
        let doc = articles_page(&["cookie banner", "terms of use"]);

        let (user, model) = provider.parse_messages(&doc);
        assert!(user.is_empty());
        assert!(model.is_empty());
    }

    #[test]
    fn test_spec_defaults() {
        let provider = ChatGptProvider::new();
        let spec = provider.spec();

        assert_eq!(spec.file_prefix, "gpt_conversation");
        assert_eq!(spec.data_dir, PathBuf::from("gpt_convo_data"));
        assert_eq!(spec.title, "Shared ChatGPT Conversation");
        assert_eq!(spec.model_display_name, "ChatGPT");
    }
}
