//! Packed process and thread identifier.
//!
//! # Bit Layout (64-bit)
//!
//! ```text
//! ┌────────────┬────────────┐
//! │ Process Id │ Thread Id  │
//! │  32 bits   │  32 bits   │
//! └────────────┴────────────┘
//! ```
//!
//! Values are unique across the threads of one process, and across the
//! processes of one host as long as no process id is reused while both
//! holders are alive. This is a best-effort guarantee, not a cryptographic
//! one.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::process::ProcessId;

/// A process id and a thread id packed into one 64-bit value.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct UniqueTid {
  bits: i64,
}

impl UniqueTid {
  /// Bit width of the thread id field.
  pub const TID_BITS: u32 = 32;

  /// Bitmask for extracting the thread id field.
  pub const TID_MASK: i64 = (1 << Self::TID_BITS) - 1;

  /// Packs `pid` into the high half and `tid` into the low half.
  #[inline]
  pub const fn new(pid: ProcessId, tid: u32) -> Self {
    let pid: i64 = pid.into_bits() as i64;
    let tid: i64 = tid as i64 & Self::TID_MASK;

    Self {
      bits: (pid << Self::TID_BITS) | tid,
    }
  }

  /// Returns the identifier of the calling thread in the host process.
  ///
  /// # Errors
  ///
  /// Fails if called while the thread-local storage of the calling thread is
  /// being destroyed.
  #[cfg(not(loom))]
  #[inline]
  pub fn current() -> core::result::Result<Self, std::thread::AccessError> {
    crate::host::Host::unique_tid()
  }

  /// Creates an identifier from its raw encoded bits.
  #[inline]
  pub const fn from_bits(bits: i64) -> Self {
    Self { bits }
  }

  /// Converts this identifier into its raw encoded bits.
  #[inline]
  pub const fn into_bits(self) -> i64 {
    self.bits
  }

  /// Returns the process id stored in the high half.
  #[inline]
  pub const fn process_id(&self) -> ProcessId {
    ProcessId::from_bits((self.bits >> Self::TID_BITS) as i32)
  }

  /// Returns the thread id stored in the low half.
  #[inline]
  pub const fn thread_id(&self) -> u32 {
    (self.bits & Self::TID_MASK) as u32
  }
}

impl Debug for UniqueTid {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for UniqueTid {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{}", self.process_id(), self.thread_id())
  }
}

impl From<UniqueTid> for i64 {
  #[inline]
  fn from(other: UniqueTid) -> Self {
    other.into_bits()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
