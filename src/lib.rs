//! procid - Process- and thread-scoped identity for ownership primitives.
//!
//! Cross-process locks and leases need an owner identifier that is compact
//! and unlikely to collide. This crate resolves, once per process:
//!
//! - the OS family and bitness of the host,
//! - the id of the running process,
//! - the size of the platform pid space, as a power of two,
//!
//! and packs the process id with a thread id into a 64-bit [`UniqueTid`].
//!
//! # Quick Start
//!
//! ```
//! use procid::host::Host;
//!
//! let pid = Host::process_id();
//! let tid = Host::unique_tid().unwrap();
//!
//! assert_eq!(tid.process_id(), pid);
//! assert_eq!(1_u64 << Host::pid_bits(), Host::pid_space().size());
//! ```
//!
//! # Modules
//!
//! - [`host`]: Cached, process-wide identity API
//! - [`platform`]: OS family and bitness classification
//! - [`process`]: Process id and pid space resolution
//! - [`ident`]: Packed process and thread identifiers
//! - [`env`]: Host properties consumed by the resolvers
//! - [`error`]: Error types
//! - [`consts`]: Default sources and fallbacks
//!
//! # Degraded Mode
//!
//! Resolution never fails. If no process id source is available a random
//! 16-bit id is used and a warning is logged under the `procid` target.
//!
//! [`UniqueTid`]: crate::ident::UniqueTid

mod loom;

pub mod config;
pub mod consts;
pub mod env;
pub mod error;
#[cfg(not(loom))]
pub mod host;
pub mod ident;
pub mod init;
pub mod platform;
pub mod probe;
pub mod process;
pub mod tyre;

pub use self::config::HostConfig;
