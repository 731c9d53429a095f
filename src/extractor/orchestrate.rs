use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use scraper::Html;
use tracing::{debug, info};

use crate::browser::Session;
use crate::error::{ExtractError, Result};
use crate::models::build_conversation;
use crate::providers::Provider;
use crate::storage::{next_conversation_path, write_conversation};

/// How long to wait for provider chat markup before giving up on a page.
pub const READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between readiness polls of the rendered document.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Run the full extraction lifecycle against an already-acquired session.
///
/// Navigates to `share_url`, waits up to [`READY_TIMEOUT`] for the
/// provider's chat markup, parses the final snapshot, allocates the next
/// output path from the provider's configuration, and persists the
/// canonical record. Returns the written path and its conversation id.
pub fn extract_chat(
    provider: &dyn Provider,
    session: &mut dyn Session,
    share_url: &str,
) -> Result<(PathBuf, String)> {
    extract_chat_with_timeout(provider, session, share_url, READY_TIMEOUT)
}

/// [`extract_chat`] with an explicit readiness timeout, for tests and
/// callers that need a shorter or longer wait.
pub fn extract_chat_with_timeout(
    provider: &dyn Provider,
    session: &mut dyn Session,
    share_url: &str,
    timeout: Duration,
) -> Result<(PathBuf, String)> {
    info!(url = share_url, "opening shared conversation");
    session.navigate(share_url)?;

    wait_for_chat(provider, session, timeout)?;

    let document = Html::parse_document(&session.content()?);
    let (user_chat, model_chat) = provider.parse_messages(&document);
    debug!(user = user_chat.len(), model = model_chat.len(), "parsed chat messages");

    let spec = provider.spec();
    let (json_path, conversation_id) =
        next_conversation_path(&spec.data_dir, &spec.file_prefix, ".json")?;

    let record = build_conversation(
        &user_chat,
        &model_chat,
        &conversation_id,
        &spec.title,
        &spec.model_display_name,
    );
    write_conversation(&json_path, &record)?;

    info!(path = %json_path.display(), id = %conversation_id, "saved conversation");
    Ok((json_path, conversation_id))
}

/// Poll the rendered document until the provider reports its chat markup,
/// or fail with [`ExtractError::ContentNotFound`] once `timeout` elapses.
///
/// Each round takes a fresh snapshot rather than sleeping a fixed total.
/// Snapshot errors while the page is still settling count as not-ready.
fn wait_for_chat(
    provider: &dyn Provider,
    session: &mut dyn Session,
    timeout: Duration,
) -> Result<()> {
    info!("waiting for chat content");
    let deadline = Instant::now() + timeout;

    loop {
        match session.content() {
            Ok(html) => {
                if provider.is_ready(&Html::parse_document(&html)) {
                    info!("chat content found");
                    return Ok(());
                }
            }
            Err(e) => debug!(error = %e, "snapshot not available yet"),
        }

        if Instant::now() >= deadline {
            info!("chat content not visible");
            return Err(ExtractError::ContentNotFound { timeout });
        }
        thread::sleep(POLL_INTERVAL);
    }
}
