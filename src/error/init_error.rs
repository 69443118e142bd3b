use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// The error type returned when the global tracing subscriber could not be
/// installed, typically because another one is already set.
#[derive(Debug)]
pub struct InitError {
  error: String,
}

impl InitError {
  #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
  #[inline]
  pub(crate) fn new<T>(error: T) -> Self
  where
    T: Display,
  {
    Self {
      error: error.to_string(),
    }
  }

  /// Returns the human-readable error message.
  #[inline]
  pub const fn error(&self) -> &str {
    self.error.as_str()
  }
}

impl Display for InitError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "failed to set tracing subscriber: {}", self.error)
  }
}

impl Error for InitError {}
