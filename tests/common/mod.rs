//! Common test utilities for appman integration tests.
//!
//! Provides `TestEnv` - an isolated temp project tree with fake external
//! tools on PATH, plus helpers to run the appman binaries.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an appman binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project tree with a private bin directory for fake tools.
///
/// Fake tools record each invocation (argv joined by spaces, one line per
/// call) into `<tool>.log` in the project root and touch their last
/// argument so the artifact a real tool would produce exists.
pub struct TestEnv {
    pub project: TempDir,
    bin_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project = TempDir::new().expect("failed to create temp project");
        let bin_dir = project.path().join(".test-bin");
        fs::create_dir(&bin_dir).unwrap();
        Self { project, bin_dir }
    }

    /// Fresh environment with a work directory and both tools installed
    pub fn with_workdir() -> Self {
        let env = Self::new();
        env.mkdirs("app");
        env.install_tool("anpylar-paketize");
        env.install_tool("anpylar-bundle");
        env
    }

    pub fn root(&self) -> &Path {
        self.project.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn mkdirs(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Install a fake tool that succeeds
    pub fn install_tool(&self, name: &str) {
        self.install_tool_with_exit(name, 0);
    }

    /// Install a fake tool exiting with `code`
    pub fn install_tool_with_exit(&self, name: &str, code: i32) {
        let log = self.path(&format!("{name}.log"));
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> '{log}'\n\
             for last; do :; done\n\
             if [ -n \"$last\" ] && [ {code} -eq 0 ]; then touch \"$last\"; fi\n\
             exit {code}\n",
            log = log.display(),
            code = code,
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Recorded invocations of a fake tool, oldest first
    pub fn tool_log(&self, name: &str) -> Vec<String> {
        let log = self.path(&format!("{name}.log"));
        if !log.exists() {
            return Vec::new();
        }
        fs::read_to_string(log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run appman from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_bin(env!("CARGO_BIN_EXE_appman"), args)
    }

    /// Run appman-serve from the project root
    pub fn run_serve(&self, args: &[&str]) -> TestResult {
        self.run_bin(env!("CARGO_BIN_EXE_appman-serve"), args)
    }

    fn run_bin(&self, bin: &str, args: &[&str]) -> TestResult {
        let path_var = std::env::var("PATH").unwrap_or_default();
        let output = Command::new(bin)
            .current_dir(self.project.path())
            .args(args)
            .env("PATH", format!("{}:{}", self.bin_dir.display(), path_var))
            .output()
            .expect("failed to execute binary");
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
