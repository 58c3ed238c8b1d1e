//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::TEST_TODAY;
use crate::process::BackgroundProcess;

/// Isolated environment for running the `larder` binary.
///
/// # Example
/// ```no_run
/// use larder_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.run(&["add", "Milk", "--date", "tomorrow"]).unwrap();
///
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("larder");

        let mut env_vars = HashMap::new();
        env_vars.insert("LARDER_TODAY".to_string(), TEST_TODAY.to_string());

        Self {
            temp_dir,
            data_dir,
            env_vars,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Pin a different "today".
    pub fn with_today(self, date: &str) -> Self {
        self.with_env("LARDER_TODAY", date)
    }

    /// Write a `config.toml` selecting the sync backend on `document`,
    /// polling fast enough for tests.
    pub fn with_sync_document(self, document: &Path) -> Self {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(
            self.data_dir.join("config.toml"),
            format!(
                "[storage]\nbackend = \"sync\"\nsync_path = \"{}\"\npoll_interval_ms = 50\n",
                document.display()
            ),
        )
        .expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("LARDER_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    #[allow(deprecated)]
    fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("larder")
            .map_err(|e| anyhow::anyhow!("Failed to find larder binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Run `larder` with `args` and an empty stdin.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Run `larder` with `args`, feeding `input` on stdin (for prompts).
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);
        cmd.write_stdin(input.as_bytes().to_vec());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Start a long-running command (such as `watch`) with piped output.
    #[allow(deprecated)]
    pub fn spawn(&self, args: &[&str]) -> Result<BackgroundProcess> {
        let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("larder"));
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain")
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("LARDER_PATH")
            .env_remove("RUST_LOG")
            .envs(&self.env_vars);

        Ok(BackgroundProcess::spawn_piped(cmd)?)
    }

    /// Add an item through the CLI and return its full id.
    pub fn add(&self, name: &str, date: &str, location: &str) -> Result<String> {
        let result = self.run(&[
            "add",
            name,
            "--date",
            date,
            "--location",
            location,
            "--format",
            "json",
        ])?;
        if !result.success() {
            anyhow::bail!("add failed: {}", result.stderr);
        }
        let json = result.json()?;
        json["content"]["item"]["id"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| anyhow::anyhow!("add output has no item id"))
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
