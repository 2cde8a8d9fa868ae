//! External tool invocation
//!
//! Every external tool runs as a blocking subprocess with inherited stdio;
//! the orchestrator waits for exit and inspects the code before moving on.
//! The trait seam exists so tests can record invocations instead of
//! spawning real tools.

use std::ffi::OsString;
use std::process::Command;

use crate::error::{AppmanError, AppmanResult};

/// Runs an external tool to completion
pub trait ToolRunner {
    /// Invoke `tool` with `args`; a non-zero exit code is an error.
    fn run(&self, tool: &str, args: &[OsString]) -> AppmanResult<()>;
}

/// Production runner: blocking `std::process::Command` with stdio passed
/// through to the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubprocessRunner;

impl ToolRunner for SubprocessRunner {
    fn run(&self, tool: &str, args: &[OsString]) -> AppmanResult<()> {
        let status = Command::new(tool)
            .args(args)
            .status()
            .map_err(|source| AppmanError::ToolSpawn {
                tool: tool.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AppmanError::ToolFailed {
                tool: tool.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

/// Render a tool invocation for log output
pub fn render_command(tool: &str, args: &[OsString]) -> String {
    let mut line = String::from(tool);
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Recording runner for tests: captures every invocation and can be told
/// to fail the nth call with a given exit code.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: std::cell::RefCell<Vec<(String, Vec<OsString>)>>,
    fail_on: Option<(usize, i32)>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(call_index: usize, code: i32) -> Self {
        Self {
            calls: Default::default(),
            fail_on: Some((call_index, code)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[cfg(test)]
impl ToolRunner for RecordingRunner {
    fn run(&self, tool: &str, args: &[OsString]) -> AppmanResult<()> {
        let index = self.calls.borrow().len();
        self.calls
            .borrow_mut()
            .push((tool.to_string(), args.to_vec()));
        match self.fail_on {
            Some((n, code)) if n == index => Err(AppmanError::ToolFailed {
                tool: tool.to_string(),
                code,
            }),
            _ => Ok(()),
        }
    }
}
