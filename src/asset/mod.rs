//! Platform detection and release-asset resolution.
//!
//! This module maps the host platform (OS family and architecture) to the
//! standalone CLI asset published for it, with a fallback for ARM
//! architecture spellings that are not listed verbatim.

mod platform;
mod resolver;

pub use platform::Platform;
pub use resolver::{UnsupportedPlatform, binary_name, destination_name, resolve};
