//! Code Review Assistant - Send code to an LLM assistant and save its review
//!
//! This library wires a code snippet through an external conversational
//! assistant and persists the result as a timestamped Markdown report. It
//! supports:
//!
//! - Acquiring code from a file, the system clipboard, or a built-in example
//! - Talking to an interpreter-compatible assistant executable
//! - Normalizing reply shapes (plain text, record, record sequence) into text
//! - Writing `code_review_<timestamp>.md` reports under a configurable directory
//!
//! # Example
//!
//! ```no_run
//! use code_review_assistant::gateway::InterpreterAssistant;
//! use code_review_assistant::models::{CodeSnippet, SnippetSource};
//! use code_review_assistant::prompt::DEFAULT_QUESTION;
//! use code_review_assistant::review_code;
//!
//! let assistant = InterpreterAssistant::from_env();
//! let snippet = CodeSnippet::new("print('hi')", SnippetSource::Clipboard);
//! let outcome = review_code(&assistant, &snippet, DEFAULT_QUESTION)?;
//! println!("Saved to {}", outcome.report_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod gateway;
pub mod input;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod report;
pub mod review;

// Re-export commonly used items
pub use input::acquire_code;
pub use models::{AssistantReply, CodeSnippet, ReplyRecord, SnippetSource};
pub use normalize::normalize;
pub use report::save_review;
pub use review::{ReviewOutcome, review_code};
