use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::ConversationRecord;

/// Serialize `record` as pretty-printed UTF-8 JSON and write it to `path`.
///
/// Non-ASCII characters are preserved literally. The write goes through a
/// temp file + rename in the same directory, so an interrupted run never
/// leaves a truncated conversation file at the allocated path.
pub fn write_conversation(path: &Path, record: &ConversationRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
