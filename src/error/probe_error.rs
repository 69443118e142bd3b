use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::io;
use std::num::ParseIntError;

/// The reason an identity source could not be used.
#[derive(Debug)]
#[non_exhaustive]
pub enum ProbeError {
  /// The source could not be opened or read.
  Io(io::Error),
  /// The source did not contain a valid integer.
  Parse(ParseIntError),
  /// The source was readable but empty.
  Empty,
  /// The value was parsed but cannot be used.
  OutOfRange(u64),
}

impl ProbeError {
  /// Returns `true` if the source does not exist at all.
  ///
  /// A missing source is expected on most platforms and is not worth more
  /// than a debug-level log.
  #[inline]
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Io(error) if error.kind() == io::ErrorKind::NotFound)
  }
}

impl Display for ProbeError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::Io(error) => write!(f, "failed to read source: {error}"),
      Self::Parse(error) => write!(f, "invalid integer: {error}"),
      Self::Empty => f.write_str("source is empty"),
      Self::OutOfRange(value) => write!(f, "value out of range: {value}"),
    }
  }
}

impl Error for ProbeError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(error) => Some(error),
      Self::Parse(error) => Some(error),
      Self::Empty | Self::OutOfRange(_) => None,
    }
  }
}

impl From<io::Error> for ProbeError {
  #[inline]
  fn from(other: io::Error) -> Self {
    Self::Io(other)
  }
}

impl From<ParseIntError> for ProbeError {
  #[inline]
  fn from(other: ParseIntError) -> Self {
    Self::Parse(other)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
