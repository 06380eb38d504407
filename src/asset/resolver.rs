use std::fmt;

/// Published assets for each supported (OS family, architecture) pair.
const ASSETS: &[((&str, &str), &str)] = &[
    (("Linux", "x86_64"), "tailwindcss-linux-x64"),
    (("Linux", "arm64"), "tailwindcss-linux-arm64"),
    (("Linux", "armv7l"), "tailwindcss-linux-armv7"),
    (("Darwin", "x86_64"), "tailwindcss-macos-x64"),
    (("Darwin", "arm64"), "tailwindcss-macos-arm64"),
    (("Windows", "x86_64"), "tailwindcss-windows-x64.exe"),
    (("Windows", "arm64"), "tailwindcss-windows-arm64.exe"),
];

/// (OS family, architecture) pair with no known or aliasable asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedPlatform {
    pub os: String,
    pub arch: String,
}

impl fmt::Display for UnsupportedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported platform: {} {}", self.os, self.arch)
    }
}

impl std::error::Error for UnsupportedPlatform {}

/// Resolve the release asset filename for a platform.
///
/// Exact table match first. ARM machines report many spellings (`arm64`,
/// `aarch64`, `armv8l`, ...); anything ARM-prefixed that is not listed
/// verbatim falls back to the OS family's arm64 asset. Pure, no I/O.
pub fn resolve(os: &str, arch: &str) -> Result<&'static str, UnsupportedPlatform> {
    if let Some((_, asset)) = ASSETS.iter().find(|((o, a), _)| *o == os && *a == arch) {
        return Ok(asset);
    }

    if is_arm(arch) {
        let alias = match os {
            "Linux" => Some("tailwindcss-linux-arm64"),
            "Darwin" => Some("tailwindcss-macos-arm64"),
            "Windows" => Some("tailwindcss-windows-arm64.exe"),
            _ => None,
        };
        if let Some(asset) = alias {
            return Ok(asset);
        }
    }

    Err(UnsupportedPlatform {
        os: os.to_string(),
        arch: arch.to_string(),
    })
}

/// Name the fetched binary is installed under for a given asset filename.
pub fn destination_name(asset: &str) -> &'static str {
    if asset.ends_with(".exe") {
        "tailwindcss.exe"
    } else {
        "tailwindcss"
    }
}

/// Name of the fetched binary on the given OS family.
pub fn binary_name(os: &str) -> &'static str {
    if os == "Windows" {
        "tailwindcss.exe"
    } else {
        "tailwindcss"
    }
}

// `aarch64` and the `arm*` spellings are the same family.
fn is_arm(arch: &str) -> bool {
    arch.starts_with("arm") || arch.starts_with("aarch")
}
