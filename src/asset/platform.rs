/// Host platform identity used for asset selection.
///
/// The OS family uses the release feed's spellings (`Linux`, `Darwin`,
/// `Windows`); the architecture is the lowercased machine name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: detect_os(),
            arch: detect_arch(),
        }
    }
}

fn detect_os() -> String {
    #[cfg(target_os = "linux")]
    {
        "Linux".to_string()
    }
    #[cfg(target_os = "macos")]
    {
        "Darwin".to_string()
    }
    #[cfg(target_os = "windows")]
    {
        "Windows".to_string()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        std::env::consts::OS.to_string()
    }
}

fn detect_arch() -> String {
    #[cfg(target_arch = "x86_64")]
    {
        "x86_64".to_string()
    }
    #[cfg(target_arch = "aarch64")]
    {
        "aarch64".to_string()
    }
    #[cfg(target_arch = "arm")]
    {
        "armv7l".to_string()
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")))]
    {
        std::env::consts::ARCH.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = Platform::detect();

        // Should return non-empty strings
        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());

        // On known platforms, verify expected values
        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, "Linux");

        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, "Darwin");

        #[cfg(target_os = "windows")]
        assert_eq!(platform.os, "Windows");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(platform.arch, "x86_64");

        #[cfg(target_arch = "aarch64")]
        assert_eq!(platform.arch, "aarch64");
    }

    #[test]
    fn test_platform_clone_and_eq() {
        let p1 = Platform {
            os: "Linux".into(),
            arch: "x86_64".into(),
        };
        let p2 = p1.clone();

        assert_eq!(p1, p2);
    }
}
