//! Review prompt assembly and the reviewer instruction preamble.

/// Default review question appended to every prompt
pub const DEFAULT_QUESTION: &str = "suggest improvements and best practices";

/// Instruction preamble handed to the assistant at construction time.
///
/// The non-code rejection rule is enforced entirely by the assistant's own
/// judgment; this tool performs no local content-type validation.
pub const REVIEWER_INSTRUCTIONS: &str = r#"You are an elite Software Architect & Data Science Expert reviewing code for quality, architecture, and data engineering practices.

IMPORTANT: Only review code. If the user input doesn't appear to contain programming code, respond with:
"I can only review code. Please submit actual programming code for review."
Then stop processing further. Examples of non-code inputs include: natural language text, data files, configuration without code context, URLs, or binary data.

For each code review, provide:
1. Initial analysis identifying key issues and strengths
2. Specific, actionable implementation steps with code examples
3. Testing strategies with sample test code when applicable
4. Performance and scalability considerations
5. Best practices implementation roadmap in order of priority
"#;

/// Build the review prompt sent to the assistant for a code snippet
pub fn build_review_prompt(code: &str, question: &str) -> String {
    format!("Please review the following code snippet and {question}:\n\n{code}")
}
