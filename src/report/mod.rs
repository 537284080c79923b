//! Review persistence: timestamped Markdown reports with chunked writes.

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::AssistantReply;
use crate::normalize::normalize;

/// Environment variable selecting the report directory
pub const REVIEW_DIR_ENV: &str = "REVIEW_DIR";

/// Report directory used when `REVIEW_DIR` is unset
pub const DEFAULT_REVIEW_DIR: &str = "code_reviews";

/// Review text is streamed to disk in chunks of this many bytes (split on
/// UTF-8 boundaries) so very large replies never sit in an extra buffer
const WRITE_CHUNK_SIZE: usize = 2000;

/// Save a review report, resolving the directory from the environment.
///
/// Returns the path of the written file,
/// `<dir>/code_review_<YYYYMMDD_HHMMSS>.md`.
pub fn save_review(original_code: &str, reply: &AssistantReply) -> Result<PathBuf> {
    let reviews_dir =
        env::var(REVIEW_DIR_ENV).unwrap_or_else(|_| DEFAULT_REVIEW_DIR.to_string());
    save_review_in(Path::new(&reviews_dir), original_code, reply)
}

/// Save a review report into an explicit directory.
///
/// The directory (and missing parents) is created if absent; a same-second
/// filename collision overwrites the earlier report.
pub fn save_review_in(
    reviews_dir: &Path,
    original_code: &str,
    reply: &AssistantReply,
) -> Result<PathBuf> {
    fs::create_dir_all(reviews_dir).with_context(|| {
        format!("Failed to create reviews directory: {}", reviews_dir.display())
    })?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filepath = reviews_dir.join(format!("code_review_{timestamp}.md"));

    let review_text = normalize(reply);
    write_report(&filepath, original_code, &review_text)
        .with_context(|| format!("Failed to write review report: {}", filepath.display()))?;

    Ok(filepath)
}

fn write_report(path: &Path, original_code: &str, review_text: &str) -> Result<()> {
    // File handle is closed by drop on every path, including write errors
    let mut file = File::create(path)?;

    file.write_all(b"# Code Review\n\n")?;
    file.write_all(b"## Original Code\n")?;
    file.write_all(b"```\n")?;
    file.write_all(original_code.as_bytes())?;
    file.write_all(b"\n```\n\n")?;
    file.write_all(b"## Assistant's Review\n")?;

    for chunk in utf8_chunks(review_text, WRITE_CHUNK_SIZE) {
        file.write_all(chunk.as_bytes())?;
        file.flush()?;
    }

    file.write_all(b"\n")?;
    file.flush()?;
    Ok(())
}

/// Split text into chunks of at most `size` bytes on character boundaries
fn utf8_chunks(text: &str, size: usize) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let mut end = size.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}
