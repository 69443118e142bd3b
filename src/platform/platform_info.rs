use crate::env::Properties;
use crate::env::Property;
use crate::platform::OsFamily;
use crate::platform::PlatformFlags;
use crate::platform::is_64bit;

/// A description of the host platform.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Platform {
  family: OsFamily,
  flags: PlatformFlags,
  is_64bit: bool,
}

impl Platform {
  /// Creates a platform description from an OS name and bitness.
  pub fn new(os_name: &str, is_64bit: bool) -> Self {
    let os: String = os_name.to_lowercase();

    Self {
      family: OsFamily::classify_lowercase(&os),
      flags: PlatformFlags::classify_lowercase(&os),
      is_64bit,
    }
  }

  /// Classifies the platform described by `properties`.
  ///
  /// A missing OS name yields [`OsFamily::Unknown`] with no flags set.
  pub fn from_properties(properties: &Properties) -> Self {
    let os_name: &str = properties.get(Property::OsName).unwrap_or_default();

    Self::new(os_name, is_64bit(properties))
  }

  /// Returns the OS family.
  #[inline]
  pub const fn os_family(&self) -> OsFamily {
    self.family
  }

  /// Returns every capability predicate that holds.
  #[inline]
  pub const fn flags(&self) -> PlatformFlags {
    self.flags
  }

  /// Returns `true` on a 64-bit platform.
  #[inline]
  pub const fn is_64bit(&self) -> bool {
    self.is_64bit
  }

  /// Returns `true` if the OS name starts with `win`.
  #[inline]
  pub const fn is_windows(&self) -> bool {
    self.flags.contains(PlatformFlags::WINDOWS)
  }

  /// Returns `true` if the OS name contains `mac`.
  #[inline]
  pub const fn is_mac_os(&self) -> bool {
    self.flags.contains(PlatformFlags::MAC_OS)
  }

  /// Returns `true` if the OS name starts with `linux`.
  #[inline]
  pub const fn is_linux(&self) -> bool {
    self.flags.contains(PlatformFlags::LINUX)
  }

  /// Returns `true` if the OS name starts with `sun`.
  #[inline]
  pub const fn is_solaris(&self) -> bool {
    self.flags.contains(PlatformFlags::SOLARIS)
  }

  /// Returns `true` if the OS name contains a Unix token.
  ///
  /// This also holds for Linux.
  #[inline]
  pub const fn is_unix(&self) -> bool {
    self.flags.contains(PlatformFlags::UNIX)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
