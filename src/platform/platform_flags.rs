use bitflags::bitflags;

use crate::platform::os_family::UNIX_TOKENS;

bitflags! {
  /// Capability predicates derived from the OS name.
  ///
  /// Each flag is tested on its own, so several may be set at once.
  #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
  pub struct PlatformFlags: u8 {
    /// The name starts with `win`.
    const WINDOWS = 1 << 0;
    /// The name contains `mac`.
    const MAC_OS  = 1 << 1;
    /// The name starts with `linux`.
    const LINUX   = 1 << 2;
    /// The name starts with `sun`.
    const SOLARIS = 1 << 3;
    /// The name contains a Unix token (`nix`, `nux`, `aix`, `bsd`, `hpux`).
    const UNIX    = 1 << 4;
  }
}

impl PlatformFlags {
  /// Evaluates every predicate against an OS name, ignoring case.
  pub fn classify(os_name: &str) -> Self {
    Self::classify_lowercase(&os_name.to_lowercase())
  }

  pub(crate) fn classify_lowercase(os: &str) -> Self {
    let mut flags: Self = Self::empty();

    flags.set(Self::WINDOWS, os.starts_with("win"));
    flags.set(Self::MAC_OS, os.contains("mac"));
    flags.set(Self::LINUX, os.starts_with("linux"));
    flags.set(Self::SOLARIS, os.starts_with("sun"));
    flags.set(Self::UNIX, UNIX_TOKENS.iter().any(|token| os.contains(token)));

    flags
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::platform::PlatformFlags;

  #[test]
  fn test_linux_is_also_unix() {
    let flags: PlatformFlags = PlatformFlags::classify("Linux");
    assert_eq!(flags, PlatformFlags::LINUX | PlatformFlags::UNIX);
  }

  #[test]
  fn test_single_flag() {
    assert_eq!(PlatformFlags::classify("Windows 10"), PlatformFlags::WINDOWS);
    assert_eq!(PlatformFlags::classify("Mac OS X"), PlatformFlags::MAC_OS);
    assert_eq!(PlatformFlags::classify("SunOS"), PlatformFlags::SOLARIS);
    assert_eq!(PlatformFlags::classify("FreeBSD"), PlatformFlags::UNIX);
  }

  #[test]
  fn test_none() {
    assert!(PlatformFlags::classify("").is_empty());
    assert!(PlatformFlags::classify("Darwin").is_empty());
  }
}
