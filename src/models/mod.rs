//! Data models for the code review assistant.
//!
//! This module defines the data structures that flow through a review run:
//!
//! - [`CodeSnippet`] - Code acquired from a file, the clipboard, or the built-in example
//! - [`AssistantReply`] - The assistant's reply in one of its three wire shapes
//! - [`ReplyRecord`] - A single keyed record inside a reply
//!
//! [`AssistantReply`] uses serde's untagged representation so a JSON reply
//! deserializes directly into the right variant, keeping the normalizer a
//! total pattern match with no runtime type sniffing.

pub mod reply;
pub mod snippet;

pub use reply::{AssistantReply, ReplyRecord};
pub use snippet::{CodeSnippet, SnippetSource};
