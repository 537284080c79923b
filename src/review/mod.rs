//! Review orchestration: prompt assembly, one assistant call, persistence.

use std::path::PathBuf;

use anyhow::Result;

use crate::gateway::Assistant;
use crate::models::CodeSnippet;
use crate::normalize::normalize;
use crate::prompt::build_review_prompt;
use crate::report::save_review;

/// Result of a completed review run
#[derive(Debug)]
pub struct ReviewOutcome {
    /// Where the Markdown report was written
    pub report_path: PathBuf,
    /// The normalized review text, for display
    pub review_text: String,
}

/// Run one review: build the prompt, ask the assistant, persist the report.
///
/// Straight-line control flow; a gateway failure propagates unmodified and
/// nothing is persisted in that case.
pub fn review_code(
    assistant: &dyn Assistant,
    snippet: &CodeSnippet,
    question: &str,
) -> Result<ReviewOutcome> {
    let prompt = build_review_prompt(&snippet.code, question);
    let reply = assistant.chat(&prompt)?;

    let report_path = save_review(&snippet.code, &reply)?;
    let review_text = normalize(&reply);

    Ok(ReviewOutcome { report_path, review_text })
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::models::{AssistantReply, ReplyRecord, SnippetSource};
    use crate::prompt::DEFAULT_QUESTION;

    struct CannedAssistant {
        reply: Option<AssistantReply>,
    }

    impl Assistant for CannedAssistant {
        fn name(&self) -> &str {
            "canned"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn chat(&self, prompt: &str) -> Result<AssistantReply> {
            assert!(prompt.starts_with("Please review the following code snippet"));
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => bail!("assistant backend unreachable"),
            }
        }
    }

    fn snippet(code: &str) -> CodeSnippet {
        CodeSnippet::new(code, SnippetSource::Clipboard)
    }

    #[test]
    fn test_review_persists_and_returns_normalized_text() {
        let temp = tempfile::TempDir::new().unwrap();
        // Report directory override is per-process; fine in a single test
        unsafe {
            std::env::set_var(crate::report::REVIEW_DIR_ENV, temp.path());
        }

        let assistant = CannedAssistant {
            reply: Some(AssistantReply::RecordSequence(vec![
                ReplyRecord::with_content("point one"),
                ReplyRecord::with_content("point two"),
            ])),
        };

        let outcome = review_code(&assistant, &snippet("x = 1"), DEFAULT_QUESTION).unwrap();
        assert_eq!(outcome.review_text, "point one\npoint two");
        assert!(outcome.report_path.starts_with(temp.path()));

        let contents = std::fs::read_to_string(&outcome.report_path).unwrap();
        assert!(contents.contains("x = 1"));
        assert!(contents.contains("point one\npoint two"));

        unsafe {
            std::env::remove_var(crate::report::REVIEW_DIR_ENV);
        }
    }

    #[test]
    fn test_gateway_failure_propagates() {
        let assistant = CannedAssistant { reply: None };
        let result = review_code(&assistant, &snippet("x = 1"), DEFAULT_QUESTION);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unreachable"));
    }
}
