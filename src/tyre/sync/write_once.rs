use core::cell::UnsafeCell;
use core::mem;
use core::mem::MaybeUninit;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::error::fatal;
use crate::loom::hint::spin_loop;
use crate::loom::sync::atomic::AtomicU8;
use crate::loom::sync::atomic::Ordering;

/// The cell holds no value and nobody is writing one.
const UNINIT: u8 = 0;
/// A single writer owns the cell and is running its initializer.
const BUSY: u8 = 1;
/// The value is written and will never change again.
const READY: u8 = 2;

/// A cell which is written at most once and can then be read concurrently
/// from any number of threads without locking.
///
/// The first caller of [`get_or_init`] (or [`set`]) claims the cell with a
/// compare-and-set of its state word and runs the initializer. Concurrent
/// callers spin until the value is published. If the initializer panics the
/// claim is released, so a later caller can try again.
///
/// [`get_or_init`]: Self::get_or_init
/// [`set`]: Self::set
pub struct WriteOnce<T> {
  state: AtomicU8,
  value: UnsafeCell<MaybeUninit<T>>,
}

// SAFETY: The value is only moved across threads when `T: Send`.
unsafe impl<T: Send> Send for WriteOnce<T> {}

// SAFETY: The value is written exactly once before `READY` is published with
//         release ordering and only shared (`&T`) afterwards.
unsafe impl<T: Send + Sync> Sync for WriteOnce<T> {}

impl<T> WriteOnce<T> {
  /// Creates a new, empty `WriteOnce`.
  #[cfg(not(loom))]
  #[inline]
  pub const fn new() -> Self {
    Self {
      state: AtomicU8::new(UNINIT),
      value: UnsafeCell::new(MaybeUninit::uninit()),
    }
  }

  /// Creates a new, empty `WriteOnce`.
  #[cfg(loom)]
  #[inline]
  pub fn new() -> Self {
    Self {
      state: AtomicU8::new(UNINIT),
      value: UnsafeCell::new(MaybeUninit::uninit()),
    }
  }

  /// Returns the stored value, or `None` if the cell is not yet initialized.
  #[inline]
  pub fn get(&self) -> Option<&T> {
    if self.state.load(Ordering::Acquire) == READY {
      // SAFETY: `READY` is only published after the value is written.
      Some(unsafe { self.get_unchecked() })
    } else {
      None
    }
  }

  /// Returns the stored value, initializing it with `init` if the cell is
  /// empty.
  ///
  /// `init` runs at most once across all threads, unless it panics. Calling
  /// this on the same cell from within `init` never returns.
  #[inline]
  pub fn get_or_init<F>(&self, init: F) -> &T
  where
    F: FnOnce() -> T,
  {
    if let Some(value) = self.get() {
      return value;
    }

    self.initialize(init);

    // SAFETY: `initialize` only returns once the state is `READY`.
    unsafe { self.get_unchecked() }
  }

  /// Stores `value` if the cell is empty.
  ///
  /// Returns the value back if the cell was already initialized.
  pub fn set(&self, value: T) -> core::result::Result<(), T> {
    let mut value: Option<T> = Some(value);

    self.initialize(|| {
      value
        .take()
        .unwrap_or_else(|| fatal!("write-once initializer invoked twice"))
    });

    // The initializer consumed the value iff this call won the claim.
    match value {
      Some(value) => Err(value),
      None => Ok(()),
    }
  }

  /// Returns `true` if the cell holds a value.
  #[inline]
  pub fn is_initialized(&self) -> bool {
    self.state.load(Ordering::Acquire) == READY
  }

  /// Runs `init` if this call wins the claim on the cell.
  ///
  /// Returns `true` if the value was written by this call. In every case the
  /// state is `READY` when this returns.
  #[cold]
  fn initialize<F>(&self, init: F) -> bool
  where
    F: FnOnce() -> T,
  {
    let mut init: Option<F> = Some(init);

    'claim: loop {
      match self
        .state
        .compare_exchange_weak(UNINIT, BUSY, Ordering::Acquire, Ordering::Acquire)
      {
        Ok(_) => {
          let Some(init) = init.take() else {
            fatal!("write-once cell claimed twice by one caller");
          };

          let guard: Release<'_> = Release { state: &self.state };
          let value: T = init();

          // SAFETY: The `BUSY` state gives us exclusive access to the slot.
          unsafe {
            (*self.value.get()).write(value);
          }

          mem::forget(guard);

          self.state.store(READY, Ordering::Release);

          break 'claim true;
        }
        Err(READY) => break 'claim false,
        Err(_) => spin_loop(),
      }
    }
  }

  /// # Safety
  ///
  /// The state must be `READY`.
  #[inline]
  unsafe fn get_unchecked(&self) -> &T {
    // SAFETY: The caller guarantees the value is initialized and it is never
    //         written again.
    unsafe { (*self.value.get()).assume_init_ref() }
  }
}

impl<T> Drop for WriteOnce<T> {
  fn drop(&mut self) {
    if self.state.load(Ordering::Acquire) == READY {
      // SAFETY: The value is initialized and we have exclusive access.
      unsafe { self.value.get_mut().assume_init_drop() }
    }
  }
}

impl<T> Debug for WriteOnce<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self.get() {
      Some(value) => f.debug_tuple("WriteOnce").field(value).finish(),
      None => f.write_str("WriteOnce(<uninit>)"),
    }
  }
}

#[cfg(not(loom))]
impl<T> Default for WriteOnce<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Returns a claimed cell to `UNINIT` if the initializer unwinds.
struct Release<'a> {
  state: &'a AtomicU8,
}

impl Drop for Release<'_> {
  fn drop(&mut self) {
    self.state.store(UNINIT, Ordering::Release);
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(all(test, not(loom)))]
mod tests {
  use std::panic;
  use std::sync::Arc;
  use std::sync::Barrier;
  use std::sync::atomic::AtomicUsize;
  use std::sync::atomic::Ordering;
  use std::thread;

  use crate::tyre::sync::WriteOnce;

  #[test]
  fn test_empty() {
    let cell: WriteOnce<u32> = WriteOnce::new();

    assert!(cell.get().is_none());
    assert!(!cell.is_initialized());
  }

  #[test]
  fn test_get_or_init_runs_once() {
    let cell: WriteOnce<u32> = WriteOnce::new();

    assert_eq!(*cell.get_or_init(|| 1), 1);
    assert_eq!(*cell.get_or_init(|| 2), 1);
    assert_eq!(cell.get(), Some(&1));
  }

  #[test]
  fn test_set() {
    let cell: WriteOnce<String> = WriteOnce::new();

    assert_eq!(cell.set("a".to_owned()), Ok(()));
    assert_eq!(cell.set("b".to_owned()), Err("b".to_owned()));
    assert_eq!(cell.get().map(String::as_str), Some("a"));
  }

  #[test]
  fn test_set_after_init() {
    let cell: WriteOnce<u8> = WriteOnce::new();

    cell.get_or_init(|| 7);

    assert_eq!(cell.set(8), Err(8));
  }

  #[test]
  fn test_panic_releases_claim() {
    let cell: WriteOnce<u32> = WriteOnce::new();

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
      cell.get_or_init(|| panic!("boom"));
    }));

    assert!(result.is_err());
    assert!(!cell.is_initialized());
    assert_eq!(*cell.get_or_init(|| 3), 3);
  }

  #[test]
  fn test_drop_value() {
    let value: Arc<()> = Arc::new(());
    let cell: WriteOnce<Arc<()>> = WriteOnce::new();

    cell.get_or_init(|| Arc::clone(&value));
    assert_eq!(Arc::strong_count(&value), 2);

    drop(cell);
    assert_eq!(Arc::strong_count(&value), 1);
  }

  #[test]
  fn test_debug() {
    let cell: WriteOnce<u32> = WriteOnce::new();
    assert_eq!(format!("{cell:?}"), "WriteOnce(<uninit>)");

    cell.get_or_init(|| 5);
    assert_eq!(format!("{cell:?}"), "WriteOnce(5)");
  }

  #[test]
  fn test_concurrent_init() {
    const THREADS: usize = 8;

    let cell: Arc<WriteOnce<usize>> = Arc::new(WriteOnce::new());
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let barrier: Arc<Barrier> = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
      .map(|index| {
        let cell: Arc<WriteOnce<usize>> = Arc::clone(&cell);
        let calls: Arc<AtomicUsize> = Arc::clone(&calls);
        let barrier: Arc<Barrier> = Arc::clone(&barrier);

        thread::spawn(move || {
          barrier.wait();

          *cell.get_or_init(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            index
          })
        })
      })
      .collect();

    let seen: Vec<usize> = handles
      .into_iter()
      .map(|handle| handle.join().unwrap())
      .collect();

    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
  }
}
