//! Assistant gateway: the boundary to the external conversational assistant.
//!
//! The assistant is an opaque collaborator reached through [`Assistant`]. The
//! shipped implementation, [`InterpreterAssistant`], shells out to an
//! interpreter-compatible executable; tests substitute stub executables or
//! in-process mocks behind the same trait.

mod interpreter;

pub use interpreter::{ASSISTANT_CMD_ENV, InterpreterAssistant};

use anyhow::Result;

use crate::models::AssistantReply;

/// A conversational assistant that accepts a prompt and returns a reply.
///
/// One `chat` call per review run; no retries, no backoff. A failing call
/// propagates to the caller unmodified.
pub trait Assistant {
    /// Name of this assistant, for diagnostics
    fn name(&self) -> &str;

    /// Whether the assistant can be reached at all (e.g. its executable exists)
    fn is_available(&self) -> bool;

    /// Send a prompt and return the reply in one of its wire shapes
    fn chat(&self, prompt: &str) -> Result<AssistantReply>;
}
