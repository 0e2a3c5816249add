//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated working directory
//! - Writing table documents and a config file into it
//! - Executing CLI commands against them

use anyhow::Result;
use assert_cmd::Command;
use mindbridge_types::TableData;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use mindbridge_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_table("clients.json", &fixtures::client_details());
///
/// let result = world.run(&["view", "clients.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// The config path points into the temp dir but no file is written until
    /// `with_config` is called, so commands run with default settings.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Working directory of every command; default export files land here.
    pub fn cwd(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve a file name relative to the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a table document into the working directory.
    pub fn with_table(self, name: &str, table: &TableData) -> Self {
        self.with_file(name, &fixtures::to_json_string(table))
    }

    /// Write arbitrary content, e.g. a malformed table document.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.path(name), content).expect("Failed to write file");
        self
    }

    /// Write the TOML config used by every command.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Times are displayed in UTC so assertions don't depend on the host zone.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--utc-offset-minutes")
            .arg("0");

        cmd.current_dir(self.cwd());
        cmd.env_remove("MINDBRIDGE_CONFIG");
        cmd.env_remove("MINDBRIDGE_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("mindbridge")
            .map_err(|e| anyhow::anyhow!("Failed to find mindbridge binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Same as `run` with `--format json` prepended.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    pub fn read_file(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(name))?)
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
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
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
