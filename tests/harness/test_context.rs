//! Shared testing harness for `tailor` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used as the working directory of CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default output directory configured by [`TestContext::write_config`].
    pub(crate) fn output_dir(&self) -> PathBuf {
        self.work_dir.join("out")
    }

    /// Build a command with no credential in the environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tailor").expect("Failed to locate tailor binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("OPENAI_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Build a command with a test credential set.
    pub(crate) fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("OPENAI_API_KEY", "sk-test-key");
        cmd
    }

    /// Write `content` to `relative` under the working directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Write the template and job description used by most contracts.
    pub(crate) fn write_inputs(&self) {
        self.write_file("main.tex", fixtures::TEMPLATE);
        self.write_file("acme.txt", fixtures::JOB_DESCRIPTION);
    }

    /// Write `tailor.toml` pointing generation at `api_url`, with compilation off.
    pub(crate) fn write_config(&self, api_url: &str) {
        let content = format!(
            r#"[generation]
api_url = "{}"
model = "gpt-4o-mini"

[compile]
enabled = false

[output]
directory = "{}"

[message]
sender_name = "Sam Carter"
sender_email = "sam@example.test"
"#,
            api_url,
            self.output_dir().display()
        );
        self.write_file("tailor.toml", &content);
    }

    pub(crate) fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name))
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", name, e))
    }

    pub(crate) fn output_exists(&self, name: &str) -> bool {
        self.output_dir().join(name).exists()
    }
}
