//! Fetcher: build the release URL and install the binary into place.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::http::HttpClient;
use crate::runtime::Runtime;
use crate::version::VersionSelector;

/// Public release origin for the standalone CLI.
pub const DEFAULT_BASE_URL: &str = "https://github.com/tailwindlabs/tailwindcss";

/// What the fetch operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The binary was downloaded and installed at the destination.
    Downloaded,
    /// The destination already existed and force was not requested.
    SkippedExisting,
}

/// Downloads `asset` for the selected `version` to `dest`.
///
/// The version string is validated before any I/O, and an existing
/// destination short-circuits the whole operation unless `force` is set.
/// The transfer is staged next to the destination and renamed into place
/// only once complete, so a failed transfer never leaves a truncated
/// binary at `dest`.
#[tracing::instrument(skip(runtime, http_client))]
pub async fn fetch<R: Runtime>(
    runtime: &R,
    http_client: &HttpClient,
    base_url: &str,
    asset: &str,
    version: &str,
    dest: &Path,
    force: bool,
) -> Result<FetchOutcome> {
    let selector: VersionSelector = version.parse()?;

    if runtime.exists(dest) && !force {
        println!(
            "{} already exists; skipping download (use --force to re-download)",
            dest.display()
        );
        return Ok(FetchOutcome::SkippedExisting);
    }

    let url = format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        selector.release_path(),
        asset
    );
    println!("Downloading {} from {}...", asset, url);

    let staging = staging_path(dest);
    let result = http_client
        .download_file(&url, || {
            runtime
                .create_file(&staging)
                .with_context(|| format!("Failed to create staging file at {:?}", staging))
        })
        .await;
    if let Err(e) = result {
        debug!("Download failed, removing staging file {:?}", staging);
        let _ = runtime.remove_file(&staging);
        return Err(e.context(format!("Failed to download {}", asset)));
    }

    runtime.rename(&staging, dest).with_context(|| {
        format!("Failed to move the downloaded binary into place at {:?}", dest)
    })?;

    if !asset.ends_with(".exe") {
        make_executable(runtime, dest)?;
    }

    println!("Downloaded and saved as {}", dest.display());
    Ok(FetchOutcome::Downloaded)
}

/// Adds the owner-executable bit to the destination's current mode.
///
/// A failure here is distinct from a download failure: the file is on disk
/// but cannot be made runnable.
fn make_executable<R: Runtime>(runtime: &R, dest: &Path) -> Result<()> {
    let mode = runtime
        .file_mode(dest)
        .with_context(|| format!("Failed to read permissions of {:?}", dest))?;
    runtime
        .set_permissions(dest, mode | 0o100)
        .with_context(|| format!("Downloaded {:?} but failed to make it executable", dest))
}

fn staging_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    dest.with_file_name(name)
}
