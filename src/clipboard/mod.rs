use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum accepted clipboard size (10MB); larger contents are rejected
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.clipboard.get_text().context("Failed to read clipboard contents")
    }
}

/// Validates clipboard text without accessing the system clipboard
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Clipboard is empty");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Clipboard contents too large ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

/// Internal function for clipboard reads with dependency injection (test use)
#[cfg(test)]
fn read_with_provider(provider: &mut dyn ClipboardProvider) -> Result<String> {
    let text = provider.get_text()?;
    validate_clipboard_text(&text)?;
    Ok(text)
}

/// Read text from the system clipboard.
///
/// # Returns
/// * `Ok(text)` with the clipboard contents
/// * `Err` if the clipboard is unavailable, empty, or oversized
///
/// # Errors
/// Returns error if:
/// - Clipboard contents are empty or whitespace-only
/// - Clipboard contents exceed 10MB
/// - Clipboard access is denied (permissions)
/// - System clipboard is unavailable (headless environment)
///
/// Callers treat every failure here as recoverable and fall through to the
/// next input source.
pub fn read_from_clipboard() -> Result<String> {
    let mut clipboard = SystemClipboard::new()?;
    let text = clipboard.get_text()?;
    validate_clipboard_text(&text)?;
    Ok(text)
}
