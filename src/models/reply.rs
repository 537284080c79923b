use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One keyed record inside an assistant reply.
///
/// The assistant's wire format puts the human-readable text under a `content`
/// key; any other fields (role, type, ...) are retained so a record without
/// `content` still has a faithful string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReplyRecord {
    /// A record carrying only review text
    pub fn with_content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), extra: Map::new() }
    }

    /// The record's own string representation, used when `content` is absent
    pub fn string_form(&self) -> String {
        // Serialization of a flattened map cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// An assistant reply in one of its three wire shapes.
///
/// Untagged so JSON deserialization picks the variant by shape: a bare string,
/// a single object, or an array of objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssistantReply {
    PlainText(String),
    Record(ReplyRecord),
    RecordSequence(Vec<ReplyRecord>),
}
