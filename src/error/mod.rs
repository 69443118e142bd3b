//! Error types for identity resolution.
//!
//! Identity resolution itself never fails: every source is optional and the
//! resolver falls through to the next one. The types here describe *why* a
//! source was skipped, so the reason can be logged.
//!
//! # Categories
//!
//! - [`ProbeError`]: A single input source was missing or malformed
//! - [`ConfigError`]: The host configuration could not be installed
//! - [`InitError`]: The tracing subscriber could not be installed
//!
//! Broken internal invariants are not represented as errors; they abort the
//! process through the internal `fatal!` macro.

mod config_error;
mod init_error;
mod macros;
mod probe_error;

pub use self::config_error::ConfigError;
pub use self::init_error::InitError;
pub use self::probe_error::ProbeError;

pub(crate) use self::macros::fatal;
