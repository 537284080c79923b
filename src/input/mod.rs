//! Code input acquisition: explicit file, then clipboard, then the built-in
//! example, in that priority order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::clipboard::read_from_clipboard;
use crate::models::{CodeSnippet, SnippetSource};

/// Fallback snippet used when no file is given and the clipboard yields nothing
pub const EXAMPLE_SNIPPET: &str = r#"
def add_numbers(a, b):
    return a + b

result = add_numbers(5, 10)
print(result)
"#;

/// Obtain a code snippet from the first available source.
///
/// - An explicit path is authoritative: any read failure is an error and no
///   fallback is attempted.
/// - Without a path, clipboard failures (unavailable, empty, oversized) are
///   expected and fall through to the built-in example with a note on stderr.
pub fn acquire_code(input_path: Option<&Path>) -> Result<CodeSnippet> {
    acquire_with_clipboard(input_path, read_from_clipboard)
}

/// Acquisition with the clipboard read injected (substituted in tests)
fn acquire_with_clipboard(
    input_path: Option<&Path>,
    read_clipboard: impl FnOnce() -> Result<String>,
) -> Result<CodeSnippet> {
    if let Some(path) = input_path {
        let code = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        return Ok(CodeSnippet::new(code, SnippetSource::File(path.to_path_buf())));
    }

    match read_clipboard() {
        Ok(code) => {
            eprintln!("Using code from clipboard");
            Ok(CodeSnippet::new(code, SnippetSource::Clipboard))
        }
        Err(e) => {
            eprintln!("Clipboard unavailable ({e:#}), using example code");
            Ok(CodeSnippet::new(EXAMPLE_SNIPPET, SnippetSource::Example))
        }
    }
}
