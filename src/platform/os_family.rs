use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Tokens marking a generic Unix-like OS name.
pub(crate) const UNIX_TOKENS: [&str; 5] = ["nix", "nux", "aix", "bsd", "hpux"];

/// The family an operating system belongs to.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum OsFamily {
  /// Microsoft Windows.
  Windows,
  /// Apple macOS.
  MacOs,
  /// Linux.
  Linux,
  /// Oracle Solaris and SunOS derivatives.
  Solaris,
  /// Any other Unix-like OS: the BSDs, AIX, HP-UX.
  OtherUnix,
  /// Not recognized.
  Unknown,
}

impl OsFamily {
  /// Classifies an OS name, ignoring case.
  pub fn classify(os_name: &str) -> Self {
    Self::classify_lowercase(&os_name.to_lowercase())
  }

  pub(crate) fn classify_lowercase(os: &str) -> Self {
    if os.starts_with("win") {
      Self::Windows
    } else if os.contains("mac") {
      Self::MacOs
    } else if os.starts_with("linux") {
      Self::Linux
    } else if os.starts_with("sun") {
      Self::Solaris
    } else if UNIX_TOKENS.iter().any(|token| os.contains(token)) {
      Self::OtherUnix
    } else {
      Self::Unknown
    }
  }

  /// Returns a short, stable name for this family.
  #[inline]
  pub const fn label(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::MacOs => "macos",
      Self::Linux => "linux",
      Self::Solaris => "solaris",
      Self::OtherUnix => "unix",
      Self::Unknown => "unknown",
    }
  }
}

impl Display for OsFamily {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.label())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
