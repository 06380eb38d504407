use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use twdl::asset::{self, Platform};
use twdl::fetch::{DEFAULT_BASE_URL, fetch};
use twdl::http::HttpClient;
use twdl::invoke::invoke;
use twdl::runtime::RealRuntime;

/// twdl - Tailwind CSS standalone binary downloader
///
/// Fetches the platform-specific standalone CLI from the public release
/// feed into the current directory, and proxies invocations to it.
///
/// Examples:
///   twdl download                     # Fetch the latest release
///   twdl download --version 3.4.12    # Fetch a pinned release
///   twdl run -- -i input.css -o out.css --minify
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Download the standalone CLI binary for this platform
    Download(DownloadArgs),

    /// Run the previously downloaded binary, forwarding all arguments
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Release to fetch: "latest" or MAJOR.MINOR.PATCH (also via TAILWIND_VERSION)
    #[arg(
        long = "version",
        env = "TAILWIND_VERSION",
        value_name = "X.Y.Z|latest",
        default_value = "latest"
    )]
    pub version: String,

    /// Re-download even if the binary already exists
    #[arg(long)]
    pub force: bool,

    /// Release origin URL (defaults to the public GitHub release feed)
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Arguments forwarded verbatim to the binary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<OsString>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::Download(args) => {
            let platform = Platform::detect();
            let asset = asset::resolve(&platform.os, &platform.arch)?;
            let dest = PathBuf::from(asset::destination_name(asset));
            let http_client = HttpClient::new(reqwest::Client::new());

            fetch(
                &runtime,
                &http_client,
                &args.base_url,
                asset,
                &args.version,
                &dest,
                args.force,
            )
            .await?;
        }
        Commands::Run(args) => {
            let code = invoke(&runtime, &args.args)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_download_defaults() {
        let cli = Cli::try_parse_from(["twdl", "download"]).unwrap();
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.version, "latest");
                assert!(!args.force);
                assert_eq!(args.base_url, DEFAULT_BASE_URL);
            }
            _ => panic!("Expected Download command"),
        }
    }

    #[test]
    fn test_cli_download_version_and_force() {
        let cli =
            Cli::try_parse_from(["twdl", "download", "--version", "3.4.12", "--force"]).unwrap();
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.version, "3.4.12");
                assert!(args.force);
            }
            _ => panic!("Expected Download command"),
        }
    }

    #[test]
    fn test_cli_download_base_url() {
        let cli = Cli::try_parse_from([
            "twdl",
            "download",
            "--base-url",
            "http://127.0.0.1:8080",
        ])
        .unwrap();
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.base_url, "http://127.0.0.1:8080");
            }
            _ => panic!("Expected Download command"),
        }
    }

    #[test]
    fn test_cli_run_forwards_hyphenated_args() {
        let cli = Cli::try_parse_from(["twdl", "run", "--", "-i", "in.css", "--minify"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(
                    args.args,
                    vec![
                        OsString::from("-i"),
                        OsString::from("in.css"),
                        OsString::from("--minify")
                    ]
                );
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_run_without_args() {
        let cli = Cli::try_parse_from(["twdl", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => assert!(args.args.is_empty()),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["twdl", "--force"]);
        assert!(result.is_err());
    }
}
