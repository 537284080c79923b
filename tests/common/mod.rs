//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for stub assistant executables (unix shell scripts).
///
/// The stub answers `--version` so availability probes pass, and prints a
/// fixed payload for any chat invocation.
pub struct StubAssistantBuilder {
    temp_dir: TempDir,
    payload: String,
    exit_code: i32,
}

impl StubAssistantBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, payload: "stub review".to_string(), exit_code: 0 }
    }

    /// Reply printed to stdout for chat invocations
    pub fn with_reply(mut self, payload: &str) -> Self {
        self.payload = payload.to_string();
        self
    }

    /// Exit code for chat invocations (version probes still succeed)
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// Write the stub script and return (holder, executable path)
    #[cfg(unix)]
    pub fn build(self) -> (TempDir, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.temp_dir.path().join("stub-assistant");
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then\n\
             \techo \"stub-assistant 0.1.0\"\n\
             \texit 0\n\
             fi\n\
             cat <<'STUB_REPLY_EOF'\n\
             {payload}\n\
             STUB_REPLY_EOF\n\
             exit {code}\n",
            payload = self.payload,
            code = self.exit_code,
        );
        fs::write(&script_path, script).expect("Failed to write stub assistant");

        let mut perms = fs::metadata(&script_path).expect("Failed to stat stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to chmod stub");

        (self.temp_dir, script_path)
    }
}

/// Collect the review report files written under a directory
pub fn report_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("code_review_") && n.ends_with(".md"))
        })
        .collect();
    files.sort();
    files
}
