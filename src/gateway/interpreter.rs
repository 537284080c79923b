use std::env;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::models::AssistantReply;

use super::Assistant;

/// Environment variable overriding the assistant executable
pub const ASSISTANT_CMD_ENV: &str = "REVIEW_ASSISTANT_CMD";

const DEFAULT_PROGRAM: &str = "interpreter";

/// Assistant backed by an interpreter-compatible executable.
///
/// The executable is invoked once per `chat` call with the prompt as the
/// final argument and its stdout captured. Auto-run stays off unless enabled
/// explicitly at construction; it is never a process-wide toggle.
#[derive(Debug, Clone)]
pub struct InterpreterAssistant {
    program: String,
    model: Option<String>,
    instructions: Option<String>,
    auto_run: bool,
}

impl InterpreterAssistant {
    /// Create an assistant invoking the default `interpreter` executable
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            model: None,
            instructions: None,
            auto_run: false,
        }
    }

    /// Create an assistant resolving the executable from `REVIEW_ASSISTANT_CMD`
    pub fn from_env() -> Self {
        match env::var(ASSISTANT_CMD_ENV) {
            Ok(program) if !program.trim().is_empty() => Self::new().with_program(program),
            _ => Self::new(),
        }
    }

    /// Use a custom executable path
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Request a specific model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the instruction preamble sent with every prompt
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Allow the assistant to execute code on its own (off by default)
    pub fn with_auto_run(mut self, auto_run: bool) -> Self {
        self.auto_run = auto_run;
        self
    }

    fn build_command(&self, prompt: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--print").arg("--output-format").arg("json");

        if let Some(ref model) = self.model {
            cmd.arg("--model").arg(model);
        }
        if let Some(ref instructions) = self.instructions {
            cmd.arg("--instructions").arg(instructions);
        }
        if self.auto_run {
            cmd.arg("--auto-run");
        }

        cmd.arg(prompt).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        cmd
    }
}

impl Default for InterpreterAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl Assistant for InterpreterAssistant {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn chat(&self, prompt: &str) -> Result<AssistantReply> {
        let output = self.build_command(prompt).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!(
                    "Assistant executable not found at '{}'. Is it installed?",
                    self.program
                )
            } else {
                anyhow::Error::new(e)
                    .context(format!("Failed to run assistant '{}'", self.program))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Assistant '{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8(output.stdout)
            .context("Assistant produced non-UTF-8 output")?;
        Ok(parse_reply(&stdout))
    }
}

/// Interpret assistant stdout: a JSON reply shape when it parses as one,
/// otherwise the raw text as a plain reply
fn parse_reply(stdout: &str) -> AssistantReply {
    let trimmed = stdout.trim_end_matches('\n');
    match serde_json::from_str::<AssistantReply>(trimmed) {
        Ok(reply) => reply,
        Err(_) => AssistantReply::PlainText(trimmed.to_string()),
    }
}
