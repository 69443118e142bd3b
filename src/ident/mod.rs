//! Packed process and thread identity.
//!
//! - [`UniqueTid`]: A process id and a thread id packed into 64 bits
//! - [`ThreadId`]: A small, per-process identifier for the calling thread

mod thread_id;
mod unique_tid;

pub use self::thread_id::ThreadId;
pub use self::unique_tid::UniqueTid;
