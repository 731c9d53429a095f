use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Scan `data_dir` for existing `{prefix}_NNN{ext}` files and return the
/// next free output path together with its conversation id (`c_NNN`).
///
/// The directory is created if missing. Indices are zero-padded to three
/// digits and simply widen past 999. Filenames that do not fully match the
/// pattern, including ones with a different prefix, are ignored.
///
/// # Errors
///
/// Returns [`ExtractError::DirectoryUnavailable`] if the directory cannot
/// be created or scanned.
pub fn next_conversation_path(
    data_dir: &Path,
    prefix: &str,
    ext: &str,
) -> Result<(PathBuf, String)> {
    let unavailable = |source: std::io::Error| ExtractError::DirectoryUnavailable {
        path: data_dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(data_dir).map_err(unavailable)?;

    let pattern = Regex::new(&format!(
        "^{}_(\\d+){}$",
        regex::escape(prefix),
        regex::escape(ext)
    ))
    .expect("escaped filename pattern is a valid regex");

    let mut max_index: u64 = 0;
    for entry in fs::read_dir(data_dir).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if let Some(caps) = pattern.captures(name)
            && let Ok(index) = caps[1].parse::<u64>()
            && index > max_index
        {
            max_index = index;
        }
    }

    let next_index = max_index + 1;
    let filename = format!("{prefix}_{next_index:03}{ext}");
    let conversation_id = format!("c_{next_index:03}");

    Ok((data_dir.join(filename), conversation_id))
}
