//! Identifier and version patterns.

use regex::Regex;
use std::sync::LazyLock;

/// Agent and team names: a lowercase letter, then lowercase letters, digits or hyphens.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*$").expect("NAME_REGEX is a valid regex pattern")
});

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("VERSION_REGEX is a valid regex pattern")
});

pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Semantic version shape `X.Y.Z`. Pre-release and build suffixes are rejected.
pub fn is_valid_version(version: &str) -> bool {
    VERSION_REGEX.is_match(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("a"));
        assert!(is_valid_name("release-coordinator"));
        assert!(is_valid_name("agent2"));
        assert!(is_valid_name("x-"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("2agent"));
        assert!(!is_valid_name("-agent"));
        assert!(!is_valid_name("Agent"));
        assert!(!is_valid_name("my_agent"));
        assert!(!is_valid_name("my agent"));
    }

    #[test]
    fn test_versions() {
        assert!(is_valid_version("1.0.0"));
        assert!(is_valid_version("10.20.30"));
        assert!(!is_valid_version("1.0"));
        assert!(!is_valid_version("v1.0.0"));
        assert!(!is_valid_version("1.0.0-beta"));
        assert!(!is_valid_version("1.0.0\n"));
    }

    #[test]
    fn test_versions_are_ascii_digits_only() {
        assert!(!is_valid_version("١.٠.٠"));
        assert!(!is_valid_version("1.٠.0"));
        assert!(!is_valid_version("１.0.0"));
    }
}
