use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::gateway::{Assistant, InterpreterAssistant};
use crate::input::acquire_code;
use crate::prompt::{DEFAULT_QUESTION, REVIEWER_INSTRUCTIONS};
use crate::review::review_code;

#[derive(Parser)]
#[command(name = "code-review-assistant")]
#[command(version = "0.1.0")]
#[command(about = "Send a code snippet to an assistant and save its review", long_about = None)]
pub struct Cli {
    /// Path to a file containing code to review (defaults to clipboard input)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let assistant =
        InterpreterAssistant::from_env().with_instructions(REVIEWER_INSTRUCTIONS);
    if !assistant.is_available() {
        bail!(
            "Assistant executable '{}' not found. Install it or set REVIEW_ASSISTANT_CMD.",
            assistant.name()
        );
    }

    let snippet = acquire_code(cli.file.as_deref())?;
    let outcome = review_code(&assistant, &snippet, DEFAULT_QUESTION)?;

    println!("Review saved to: {}", outcome.report_path.display());
    println!();
    println!("{}", outcome.review_text);

    Ok(())
}
