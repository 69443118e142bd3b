use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// The error type returned when failing to configure the host.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ConfigError {
  /// The configuration was already fixed, either by an earlier call to
  /// [`Host::configure`] or by a lookup that initialized the defaults.
  ///
  /// [`Host::configure`]: crate::host::Host::configure
  AlreadyInitialized,
}

impl Display for ConfigError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::AlreadyInitialized => f.write_str("host configuration is already initialized"),
    }
  }
}

impl Error for ConfigError {}
