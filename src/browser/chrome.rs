use std::sync::Arc;

use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::debug;

use crate::error::{ExtractError, Result};

use super::Session;

/// A dedicated headless Chrome process with a single tab.
pub struct ChromeSession {
    // Keeps the Chrome process alive for the tab's lifetime; dropping it
    // tears the process down.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeSession {
    /// Launch a fresh headless Chrome with a desktop-sized window.
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1920, 1080)))
            .build()
            .map_err(|e| ExtractError::Session(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ExtractError::Session(e.to_string()))?;
        let tab = browser.new_tab().map_err(|e| ExtractError::Session(e.to_string()))?;

        debug!("launched headless Chrome session");
        Ok(Self { _browser: browser, tab })
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        // The Browser's own drop tears the Chrome process down.
        debug!("closing headless Chrome session");
    }
}

impl Session for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.tab.navigate_to(url).map_err(|e| ExtractError::Session(e.to_string()))?;
        Ok(())
    }

    fn content(&mut self) -> Result<String> {
        self.tab.get_content().map_err(|e| ExtractError::Session(e.to_string()))
    }
}
