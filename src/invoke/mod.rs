//! Invoker: proxy an invocation to the previously fetched binary.

use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsString;

use crate::asset::{Platform, binary_name};
use crate::runner::run_command;
use crate::runtime::Runtime;

/// Runs the fetched binary from the current working directory, forwarding
/// `args` verbatim, and returns its exit code.
///
/// The binary is looked up only in the current working directory, never on
/// PATH, so the tool stays hermetic to the checkout it was fetched into.
/// A missing binary is an error directing the user to the download step;
/// it is never fetched implicitly.
#[tracing::instrument(skip(runtime, args))]
pub fn invoke<R: Runtime>(runtime: &R, args: &[OsString]) -> Result<i32> {
    let platform = Platform::detect();
    let binary = binary_name(&platform.os);
    let binary_path = runtime.current_dir()?.join(binary);

    if !runtime.exists(&binary_path) {
        anyhow::bail!(
            "{} binary not found in the current directory.\n\
             Download it first by running:\n    twdl download",
            binary
        );
    }

    debug!("Running {:?} with {} argument(s)", binary_path, args.len());
    let status = run_command(binary_path.as_os_str(), args)
        .with_context(|| format!("Failed to run {}", binary))?;

    // A signal-killed child has no exit code; report a generic failure
    Ok(status.code().unwrap_or(1))
}
