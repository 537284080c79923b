use anyhow::Result;

fn main() -> Result<()> {
    code_review_assistant::cli::run()
}
