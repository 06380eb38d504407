//! HTTP transfer layer for release downloads.

mod client;
mod error;

pub use client::HttpClient;
pub use error::DownloadError;
