//! Output file management: sequential path allocation and JSON export.
//!
//! # Error Handling Strategy
//!
//! Storage failures are fatal to an extraction run and propagate unhandled:
//!
//! - **Directory failures**: a directory that cannot be created or scanned
//!   raises [`crate::ExtractError::DirectoryUnavailable`]. There is no
//!   fallback location.
//!
//! - **Write failures**: export I/O errors propagate as-is. The export path
//!   is written via temp file + rename, so a failed or interrupted write
//!   never leaves a truncated conversation file at the allocated path.
//!
//! Allocation does not reserve paths: the scan-then-write window is
//! unsynchronized, and callers running extractions concurrently against the
//! same directory must serialize them.

pub mod export;
pub mod paths;

pub use export::write_conversation;
pub use paths::next_conversation_path;
