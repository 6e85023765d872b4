//! Test environment builder for isolated `ipa` runs.
//!
//! Provides `TestEnv` - a temp working directory plus a temp home, with all
//! `IPA_SHIP_*` variables cleared and stdin detached so no prompt can block.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "IPA_SHIP_HOST",
    "IPA_SHIP_USER",
    "IPA_SHIP_PASSWORD",
    "IPA_SHIP_PATH",
    "IPA_SHIP_PROTOCOL",
    "RUST_LOG",
];

/// Result of running the `ipa` binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON line ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated working directory and home
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ipa")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write the user config (`$XDG_CONFIG_HOME/ipa-ship/config.toml`)
    pub fn write_user_config(&self, toml: &str) {
        let path = self.xdg_config_home().join("ipa-ship/config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        std::fs::write(path, toml).expect("Failed to write user config");
    }

    fn xdg_config_home(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    /// Run `ipa` from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run `ipa` from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let output = self
            .command(cwd, args, env_vars)
            .output()
            .expect("Failed to execute ipa");
        Self::output_to_result(output)
    }

    /// Run `ipa` with stdout redirected to `stdout`; the result's stdout is empty
    pub fn run_with_stdout(&self, args: &[&str], stdout: Stdio) -> TestResult {
        let output = self
            .command(self.project_root.path(), args, &[])
            .stdout(stdout)
            .output()
            .expect("Failed to execute ipa");
        Self::output_to_result(output)
    }

    fn command(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.xdg_config_home())
            .env("NO_COLOR", "1");
        for key in ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
