//! Shared helpers for the CLI integration tests.
//!
//! - `CliRunner::run` drives `whodunit_cli::run` in-process with captured
//!   stdout/stderr and a clean `WHODUNIT_*` environment.
//! - `CliRunner::run_binary_with_input` spawns the built `whodunit` binary
//!   with piped stdin, for the interactive seat.
//!
//! Tests that go through `run` read process-wide environment variables and
//! must be marked `#[serial]`.

#![allow(dead_code)]

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const CONFIG_VARS: [&str; 5] = [
    "WHODUNIT_CONFIG",
    "WHODUNIT_SEED",
    "WHODUNIT_PLAYERS",
    "WHODUNIT_STRATEGY",
    "WHODUNIT_MAX_TURNS",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Sets environment variables for its lifetime and restores the previous
/// values on drop.
struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: tempfile::TempDir,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_whodunit")),
            temp_dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    /// Scratch directory removed when the runner drops.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, contents).expect("write temp file");
        path
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv: Vec<String> = std::iter::once("whodunit".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let code = whodunit_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }

    /// `input` must fit in a pipe buffer; it is written in full before the
    /// output is collected.
    pub fn run_binary_with_input(&self, args: &[&str], input: &str) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.dir())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in CONFIG_VARS.iter().chain(&["RUST_LOG"]) {
            cmd.env_remove(key);
        }

        let mut child = cmd.spawn().expect("failed to spawn CLI binary");
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
