//! Shared test harness for di-cli integration tests.
//!
//! Runs the compiled `di` binary with a pinned environment so logging and
//! configuration defaults cannot leak in from the caller.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

fn pin_env(cmd: &mut Command, dir: &Path) {
    cmd.current_dir(dir)
        .env_remove("DI_ALGORITHM")
        .env("DI_LOG", "off")
        .env("LC_ALL", "C");
}

fn capture(output: std::process::Output) -> CommandResult {
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Run `di` in `dir` with the given arguments.
pub fn di(dir: &Path, args: &[&str]) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_di"));
    cmd.args(args);
    pin_env(&mut cmd, dir);
    capture(cmd.output().expect("failed to run di"))
}

/// Run `di` with an extra environment variable.
pub fn di_with_env(dir: &Path, args: &[&str], key: &str, value: &str) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_di"));
    cmd.args(args);
    pin_env(&mut cmd, dir);
    cmd.env(key, value);
    capture(cmd.output().expect("failed to run di"))
}

/// Run `di` with piped stdin.
pub fn di_stdin(dir: &Path, args: &[&str], stdin_bytes: &[u8]) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_di"));
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    pin_env(&mut cmd, dir);
    let mut child = cmd.spawn().expect("failed to spawn di");
    {
        use std::io::Write;
        child.stdin.take().unwrap().write_all(stdin_bytes).unwrap();
    }
    capture(child.wait_with_output().expect("failed to wait on di"))
}
