use std::cell::Cell;
use std::num::NonZeroU32;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::thread::AccessError;

use crate::error::fatal;

thread_local! {
  static ASSIGNED: Cell<Option<ThreadId>> = const { Cell::new(None) };
}

/// Number of thread ids handed out so far.
static ISSUED: AtomicU32 = AtomicU32::new(0);

/// The thread half of a [`UniqueTid`].
///
/// A thread is given the next id in sequence, starting at `1`, the first
/// time it asks for one. Ids are never reused within a process, and every id
/// fits the 32-bit low half of a [`UniqueTid`] unchanged.
///
/// [`UniqueTid`]: crate::ident::UniqueTid
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ThreadId {
  inner: NonZeroU32,
}

impl ThreadId {
  /// Returns the id assigned to the calling thread, assigning one if needed.
  ///
  /// # Errors
  ///
  /// Fails if called while the thread-local storage of the calling thread is
  /// being destroyed.
  #[inline]
  pub fn current() -> Result<Self, AccessError> {
    ASSIGNED.try_with(|slot| match slot.get() {
      Some(id) => id,
      None => {
        let id: ThreadId = Self::assign();
        slot.set(Some(id));
        id
      }
    })
  }

  /// Returns the value stored in the low half of a [`UniqueTid`].
  ///
  /// [`UniqueTid`]: crate::ident::UniqueTid
  #[inline]
  pub const fn as_u32(&self) -> NonZeroU32 {
    self.inner
  }

  #[cold]
  fn assign() -> Self {
    match Self::advance(&ISSUED) {
      Some(id) => id,
      None => fatal!("no thread id left for the low half of a unique tid"),
    }
  }

  /// Takes the next id from `issued`, or `None` once all `u32::MAX` ids are
  /// taken.
  fn advance(issued: &AtomicU32) -> Option<Self> {
    issued
      .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| count.checked_add(1))
      .ok()
      .and_then(|count| count.checked_add(1))
      .and_then(NonZeroU32::new)
      .map(|inner| Self { inner })
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
