//! Reply normalization: collapse any assistant reply shape into one flat
//! string for display and storage.

use crate::models::{AssistantReply, ReplyRecord};

/// Flatten a reply into display text.
///
/// Total and deterministic: every shape produces some string, including the
/// empty string for an empty record sequence.
pub fn normalize(reply: &AssistantReply) -> String {
    match reply {
        AssistantReply::PlainText(text) => text.clone(),
        AssistantReply::Record(record) => record_text(record),
        AssistantReply::RecordSequence(records) => {
            records.iter().map(record_text).collect::<Vec<_>>().join("\n")
        }
    }
}

/// A record's display text: its `content`, or its own string form without one
fn record_text(record: &ReplyRecord) -> String {
    match &record.content {
        Some(content) => content.clone(),
        None => record.string_form(),
    }
}
