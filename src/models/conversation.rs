use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which of the two fixed agents produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Model,
}

/// Chat role as downstream consumers expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Agent classification in the `agents` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Human,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: AgentKind,
}

/// The two fixed participants of every exported conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agents {
    pub user: AgentInfo,
    pub model: AgentInfo,
}

/// One turn entry. Ids are `u_{i}` or `m_{i}` where `i` is the turn index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub agent: Speaker,
    pub role: Role,
    pub content: String,
}

/// The conversation object serialized to each output file.
///
/// Built once per extraction run, written immediately, never mutated or
/// re-loaded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub conversation_id: String,
    pub title: String,
    pub agents: Agents,
    pub messages: Vec<Message>,
}

/// Pair user and model messages index-wise into the canonical record.
///
/// Messages interleave as strict turns, `u_i` immediately before `m_i`.
/// When the two lists differ in length the record is truncated to the
/// shorter list; the dropped tail usually points at a parsing gap, so the
/// mismatch is logged at warn level. Output is deterministic for identical
/// inputs.
pub fn build_conversation(
    user_messages: &[String],
    model_messages: &[String],
    conversation_id: &str,
    title: &str,
    model_display_name: &str,
) -> ConversationRecord {
    if user_messages.len() != model_messages.len() {
        warn!(
            user = user_messages.len(),
            model = model_messages.len(),
            "user/model message counts differ, truncating to the shorter list"
        );
    }

    let pairs = user_messages.len().min(model_messages.len());
    let mut messages = Vec::with_capacity(2 * pairs);

    for (i, (user_msg, model_msg)) in user_messages.iter().zip(model_messages).enumerate() {
        messages.push(Message {
            id: format!("u_{i}"),
            agent: Speaker::User,
            role: Role::User,
            content: user_msg.clone(),
        });
        messages.push(Message {
            id: format!("m_{i}"),
            agent: Speaker::Model,
            role: Role::Assistant,
            content: model_msg.clone(),
        });
    }

    ConversationRecord {
        conversation_id: conversation_id.to_string(),
        title: title.to_string(),
        agents: Agents {
            user: AgentInfo {
                id: "user".to_string(),
                display_name: "User".to_string(),
                kind: AgentKind::Human,
            },
            model: AgentInfo {
                id: "model".to_string(),
                display_name: model_display_name.to_string(),
                kind: AgentKind::Assistant,
            },
        },
        messages,
    }
}
