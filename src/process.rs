//! Synchronous subprocess execution.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io;
use std::process::Command;
use tracing::debug;

/// Environment handed to a child process. Keys and values are kept as raw
/// OS strings so nothing is lost on the way through.
pub type Environment = BTreeMap<OsString, OsString>;

/// Snapshot of the current process environment, every variable included.
pub fn capture_env() -> Environment {
    std::env::vars_os().collect()
}

/// Read `key` from `env` as UTF-8. Missing or non UTF-8 values are `None`.
pub fn env_var<'a>(env: &'a Environment, key: &str) -> Option<&'a str> {
    env.get(OsStr::new(key)).and_then(|value| value.to_str())
}

/// How a finished child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
    Code(i32),
    /// Ended without an exit code (killed by a signal)
    Terminated,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        matches!(self, ProcessExit::Code(0))
    }
}

/// Runs an argument vector to completion.
pub trait ProcessRunner {
    /// `argv[0]` is the program. The child sees exactly `env`.
    fn run(&self, argv: &[OsString], env: &Environment) -> io::Result<ProcessExit>;
}

/// Runner backed by `std::process::Command` with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[OsString], env: &Environment) -> io::Result<ProcessExit> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;

        debug!(program = ?program, args = args.len(), "Spawning process");
        let status = Command::new(program)
            .args(args)
            .env_clear()
            .envs(env)
            .status()?;

        Ok(match status.code() {
            Some(code) => ProcessExit::Code(code),
            None => ProcessExit::Terminated,
        })
    }
}
