use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of an operating system process.
///
/// A process id is only meaningful on the host it was resolved on, and only
/// while that process is alive; the OS may reuse it afterwards.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ProcessId {
  bits: i32,
}

impl ProcessId {
  /// Creates a process id from its raw value.
  #[inline]
  pub const fn from_bits(bits: i32) -> Self {
    Self { bits }
  }

  /// Converts this process id into its raw value.
  #[inline]
  pub const fn into_bits(self) -> i32 {
    self.bits
  }
}

impl Debug for ProcessId {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for ProcessId {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(&self.bits, f)
  }
}

impl FromStr for ProcessId {
  type Err = ParseIntError;

  #[inline]
  fn from_str(src: &str) -> core::result::Result<Self, Self::Err> {
    src.parse().map(Self::from_bits)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::process::ProcessId;

  #[test]
  fn test_from_bits_roundtrip() {
    assert_eq!(ProcessId::from_bits(4242).into_bits(), 4242);
  }

  #[test]
  fn test_parse() {
    assert_eq!("1234".parse::<ProcessId>(), Ok(ProcessId::from_bits(1234)));
    assert!("".parse::<ProcessId>().is_err());
    assert!("self".parse::<ProcessId>().is_err());
    assert!("4294967296".parse::<ProcessId>().is_err());
  }

  #[test]
  fn test_debug_equals_display() {
    let pid: ProcessId = ProcessId::from_bits(77);

    assert_eq!(format!("{pid}"), "77");
    assert_eq!(format!("{pid:?}"), "77");
  }
}
