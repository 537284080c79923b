use std::path::PathBuf;

/// Where a code snippet came from, in acquisition priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetSource {
    /// Read from an explicitly given file path
    File(PathBuf),
    /// Read from the system clipboard
    Clipboard,
    /// The built-in fallback example
    Example,
}

/// A code snippet together with its origin
#[derive(Debug, Clone)]
pub struct CodeSnippet {
    pub code: String,
    pub source: SnippetSource,
}

impl CodeSnippet {
    pub fn new(code: impl Into<String>, source: SnippetSource) -> Self {
        Self { code: code.into(), source }
    }

    /// True if this snippet is the built-in example rather than user input
    pub fn is_example(&self) -> bool {
        matches!(self.source, SnippetSource::Example)
    }
}
