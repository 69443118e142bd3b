//! Tracing subscriber setup.
//!
//! The crate logs through `tracing` under the `procid` target. Applications
//! that do not install a subscriber of their own can enable the `tracing`
//! feature and call [`init_tracing_subscriber`].

#[cfg(feature = "tracing")]
use crate::error::InitError;

// -----------------------------------------------------------------------------
// Tracing Config
// -----------------------------------------------------------------------------

/// Options used to configure the global tracing subscriber.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TracingConfig {
  pub source_file: bool,
  pub source_line: bool,
  pub source_name: bool,
  pub thread_info: bool,
  pub verbose: bool,
  pub very_verbose: bool,
}

impl TracingConfig {
  #[inline]
  pub const fn new() -> Self {
    Self {
      source_file: false,
      source_line: false,
      source_name: true,
      thread_info: true,
      verbose: false,
      very_verbose: false,
    }
  }

  /// Returns the most verbose level that will be recorded.
  #[inline]
  pub const fn level(&self) -> tracing::Level {
    if self.very_verbose {
      tracing::Level::TRACE
    } else if self.verbose {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    }
  }
}

impl Default for TracingConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Installs a compact `fmt` subscriber as the global default.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing")]
pub fn init_tracing_subscriber(config: &TracingConfig) -> Result<(), InitError> {
  use tracing_subscriber::FmtSubscriber;
  use tracing_subscriber::fmt::format;
  use tracing_subscriber::util::SubscriberInitExt;

  FmtSubscriber::builder()
    .event_format(format().compact())
    .log_internal_errors(true)
    .with_ansi(true)
    .with_file(config.source_file)
    .with_level(true)
    .with_line_number(config.source_line)
    .with_max_level(config.level())
    .with_target(config.source_name)
    .with_thread_ids(config.thread_info)
    .with_thread_names(config.thread_info)
    .finish()
    .try_init()
    .map_err(InitError::new)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
