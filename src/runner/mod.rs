//! Shell-out helpers: run one command, or a sequence that stops at the
//! first fatal failure.

use anyhow::{Context, Result};
use log::warn;
use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus};

/// Spawns `program` with `args`, inheriting stdio, and waits for it.
pub fn run_command(program: &OsStr, args: &[OsString]) -> Result<ExitStatus> {
    Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to start {:?}", program))
}

/// One step of a command sequence.
#[derive(Debug, Clone)]
pub struct CommandStep {
    pub program: String,
    pub args: Vec<String>,
    /// Printed before the step runs; defaults to `Running: <command>`.
    pub message: Option<String>,
    /// A nonzero exit stops the whole sequence when set.
    pub fatal: bool,
}

impl CommandStep {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            message: None,
            fatal: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn non_fatal(mut self) -> Self {
        self.fatal = false;
        self
    }

    fn describe(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None if self.args.is_empty() => format!("Running: {}", self.program),
            None => format!("Running: {} {}", self.program, self.args.join(" ")),
        }
    }
}

/// Runs each step in order, stopping with an error at the first nonzero
/// exit of a fatal step. Non-fatal failures are logged and skipped over.
pub fn run_sequence(steps: &[CommandStep]) -> Result<()> {
    for step in steps {
        println!("{}", step.describe());

        let args: Vec<OsString> = step.args.iter().map(OsString::from).collect();
        let status = run_command(OsStr::new(&step.program), &args)?;

        if !status.success() {
            let code = status.code().unwrap_or(1);
            if step.fatal {
                anyhow::bail!("Command {:?} failed with exit code {}", step.program, code);
            }
            warn!(
                "Command {:?} failed with exit code {}; continuing",
                step.program, code
            );
        }
    }
    Ok(())
}
