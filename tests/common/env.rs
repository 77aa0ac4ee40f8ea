//! Test environment for isolated circle-lab CLI runs.
//!
//! Every run gets its own working directory (where `circle-lab.toml` is
//! looked up) and its own `XDG_CONFIG_HOME`, and has all `CIRCLE_LAB_*`
//! variables cleared so the host environment cannot leak in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const ENV_KEYS: &[&str] = &["CIRCLE_LAB_RADIUS", "CIRCLE_LAB_VERBOSITY", "CIRCLE_LAB_FORMAT"];

/// Result of running a circle-lab CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {l:?}: {e}"))
            })
            .collect()
    }

    /// First event with the given `event` field
    pub fn event(&self, name: &str) -> Option<serde_json::Value> {
        self.json_lines().into_iter().find(|v| v["event"] == name)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the CLI
    pub project_root: TempDir,
    /// Used as XDG_CONFIG_HOME
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_circle-lab")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write `circle-lab.toml` in the project root
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_path("circle-lab.toml");
        std::fs::write(&path, content).expect("Failed to write project config");
        path
    }

    /// Write `circle-lab/config.toml` under the test XDG_CONFIG_HOME
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.path().join("circle-lab");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write user config");
        path
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1");

        for key in ENV_KEYS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute circle-lab");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
