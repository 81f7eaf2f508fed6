//! Test environment for running the recipebook binary in isolation.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Result of running the recipebook binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: HOME and XDG_CONFIG_HOME point into a temp dir
pub struct TestEnv {
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_recipebook")),
        }
    }

    /// Path of the user config file inside this environment
    #[allow(dead_code)]
    pub fn user_config_path(&self) -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            self.home_dir.path().join("Library/Application Support")
        } else {
            self.home_dir.path().join(".config")
        };
        base.join("recipebook/config.toml")
    }

    /// Write a file under the temp home and return its path
    #[allow(dead_code)]
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run with `input` piped to stdin
    pub fn run(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with_env(args, input, &[])
    }

    pub fn run_with_env(&self, args: &[&str], input: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RECIPEBOOK_CALORIE_THRESHOLD")
            .env_remove("RECIPEBOOK_ON_INVALID")
            .env_remove("RECIPEBOOK_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().unwrap();
        // The child may exit before reading everything (abort policy)
        let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
        let output = child.wait_with_output().unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
