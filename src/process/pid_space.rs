use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;
use tracing::debug;
use tracing::error;

use crate::config::HostConfig;
use crate::consts;
use crate::error::ProbeError;
use crate::error::fatal;
use crate::platform::Platform;

/// The number of distinct process ids a platform can hand out, as a power of
/// two.
///
/// Consumers use [`PidSpace::bits`] to size bitfields holding a process id.
/// The size is never smaller than the platform ceiling it was derived from.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PidSpace {
  size: NonZeroU64,
}

impl PidSpace {
  /// Pid space used when the platform ceiling is unknown.
  pub const DEFAULT: Self = Self::assert_pow2(consts::DEFAULT_PID_SPACE);

  /// Pid space of macOS.
  pub const MAC_OS: Self = Self::assert_pow2(consts::MAC_OS_PID_SPACE);

  /// Creates a pid space large enough to hold `ceiling` ids.
  ///
  /// Returns `None` if `ceiling` is zero or its rounded size does not fit in
  /// a `u64`.
  #[inline]
  pub const fn from_ceiling(ceiling: u64) -> Option<Self> {
    match round_up_pow2(ceiling) {
      Some(size) => Self::from_size(size),
      None => None,
    }
  }

  /// Creates a pid space of exactly `size` ids.
  ///
  /// Returns `None` if `size` is not a power of two.
  #[inline]
  pub const fn from_size(size: u64) -> Option<Self> {
    if !size.is_power_of_two() {
      return None;
    }

    match NonZeroU64::new(size) {
      Some(size) => Some(Self { size }),
      None => None,
    }
  }

  /// Returns the number of ids in this space.
  #[inline]
  pub const fn size(&self) -> u64 {
    self.size.get()
  }

  /// Returns the number of bits needed to store any id in this space.
  ///
  /// This is the exact base-2 logarithm of [`size`](Self::size).
  #[inline]
  pub fn bits(&self) -> u32 {
    let size: u64 = self.size.get();

    if !size.is_power_of_two() {
      fatal!("pid space is not a power of two");
    }

    size.trailing_zeros()
  }

  /// Resolves the pid space of `platform`.
  ///
  /// On Linux the ceiling is read from [`HostConfig::pid_max_path`]; if the
  /// file is missing or invalid the default space is used. macOS has a fixed
  /// space and does not touch the filesystem.
  pub fn resolve(platform: &Platform, config: &HostConfig) -> Self {
    if platform.is_linux() {
      match Self::read_pid_max(&config.pid_max_path) {
        Ok(space) => space,
        Err(error) if error.is_not_found() => {
          debug!(
            target: "procid",
            path = %config.pid_max_path.display(),
            "pid ceiling not found, using default",
          );

          config.default_pid_space
        }
        Err(error) => {
          error!(
            target: "procid",
            path = %config.pid_max_path.display(),
            error = %error,
            "failed to read pid ceiling, using default",
          );

          config.default_pid_space
        }
      }
    } else if platform.is_mac_os() {
      config.mac_os_pid_space
    } else {
      config.default_pid_space
    }
  }

  /// Reads a pid ceiling from the first integer token in `path`.
  pub fn read_pid_max(path: &Path) -> core::result::Result<Self, ProbeError> {
    let text: String = fs::read_to_string(path)?;
    let Some(token) = text.split_whitespace().next() else {
      return Err(ProbeError::Empty);
    };

    let ceiling: u64 = token.parse()?;

    Self::from_ceiling(ceiling).ok_or(ProbeError::OutOfRange(ceiling))
  }

  const fn assert_pow2(size: u64) -> Self {
    match Self::from_size(size) {
      Some(this) => this,
      None => panic!("pid space must be a power of two"),
    }
  }
}

impl Debug for PidSpace {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("PidSpace")
      .field("size", &self.size())
      .field("bits", &self.bits())
      .finish()
  }
}

impl Display for PidSpace {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "2^{}", self.bits())
  }
}

/// Rounds `value` up to a power of two.
///
/// A value which already is a power of two is returned unchanged. Returns
/// `None` for zero, and when the result would not fit in a `u64`.
#[inline]
pub const fn round_up_pow2(value: u64) -> Option<u64> {
  if value == 0 {
    return None;
  }

  if value & (value - 1) == 0 {
    return Some(value);
  }

  let shift: u32 = u64::BITS - value.leading_zeros();

  if shift >= u64::BITS {
    None
  } else {
    Some(1 << shift)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
