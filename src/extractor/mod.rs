//! The shared extraction lifecycle.
//!
//! Every provider goes through the same fixed sequence: navigate →
//! wait-for-content → parse → allocate path → build record → persist. Only
//! the readiness check and the parsing step come from the provider.
//!
//! # Error Handling Strategy
//!
//! - **Readiness timeout**: the single retryable failure point. If the
//!   provider's markup never shows up within the fixed wait, the run fails
//!   with [`crate::ExtractError::ContentNotFound`] — logged, propagated,
//!   never retried internally.
//!
//! - **Zero parsed messages**: not a failure. An empty or shorter message
//!   list produces a valid (possibly empty) record on the happy path.
//!
//! - **Everything else** (session launch, directory access, write errors)
//!   is fatal and propagates unhandled. Steps that can fail all precede
//!   file creation, so a failed run leaves the output directory untouched.

pub mod api;
pub mod orchestrate;

pub use api::{extract_chatgpt_conversation, extract_gemini_conversation};
pub use orchestrate::{READY_TIMEOUT, extract_chat, extract_chat_with_timeout};
