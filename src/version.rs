//! Release version selection and validation.

use std::fmt;
use std::str::FromStr;

/// Which release of the standalone CLI to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// The provider's "latest release" redirect.
    Latest,
    /// A pinned `MAJOR.MINOR.PATCH` release.
    Pinned(String),
}

/// Version string that is neither `latest` nor `MAJOR.MINOR.PATCH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVersion(pub String);

impl fmt::Display for InvalidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid version {:?}: expected \"latest\" or MAJOR.MINOR.PATCH (e.g. 3.4.12)",
            self.0
        )
    }
}

impl std::error::Error for InvalidVersion {}

impl FromStr for VersionSelector {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "latest" {
            return Ok(VersionSelector::Latest);
        }
        if is_dotted_triplet(s) {
            return Ok(VersionSelector::Pinned(s.to_string()));
        }
        Err(InvalidVersion(s.to_string()))
    }
}

impl VersionSelector {
    /// Release path under the download origin.
    ///
    /// `latest` uses the provider's latest-release redirect; a pinned
    /// version addresses the `v`-prefixed release tag directly.
    pub fn release_path(&self) -> String {
        match self {
            VersionSelector::Latest => "releases/latest/download".to_string(),
            VersionSelector::Pinned(version) => format!("releases/download/v{}", version),
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSelector::Latest => write!(f, "latest"),
            VersionSelector::Pinned(version) => write!(f, "{}", version),
        }
    }
}

// Exactly three dot-separated runs of ASCII digits.
fn is_dotted_triplet(s: &str) -> bool {
    let mut parts = 0;
    for part in s.split('.') {
        parts += 1;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    parts == 3
}
