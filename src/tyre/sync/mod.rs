//! Synchronization primitives with write-once semantics.
//!
//! - [`WriteOnce`]: A cell initialized at most once, then read without locking

mod write_once;

pub use self::write_once::WriteOnce;
