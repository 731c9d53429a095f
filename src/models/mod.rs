//! Canonical conversation record shared by every provider.
//!
//! This module defines the provider-agnostic data structures written to
//! disk:
//!
//! - [`ConversationRecord`] - the JSON-serializable conversation object
//! - [`Message`] - one user or model turn entry
//! - [`build_conversation`] - pure pairing of raw message lists
//!
//! Providers only influence the record's title and the model agent's
//! display name; the schema itself never varies.

pub mod conversation;

pub use conversation::{
    AgentInfo, AgentKind, Agents, ConversationRecord, Message, Role, Speaker, build_conversation,
};
