//! Ordered fallback chains.
//!
//! A [`Probe`] is a named function which tries to read one value from one
//! source. Resolvers keep their fallback policy as a static slice of probes
//! and take the first one that succeeds, see [`first_match`].

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use tracing::debug;
use tracing::trace;

/// A named source for a value of type `O`, read from an input of type `I`.
pub struct Probe<I: ?Sized, O> {
  name: &'static str,
  run: fn(&I) -> Option<O>,
}

impl<I: ?Sized, O> Probe<I, O> {
  /// Creates a new probe.
  #[inline]
  pub const fn new(name: &'static str, run: fn(&I) -> Option<O>) -> Self {
    Self { name, run }
  }

  /// Returns the name of this probe.
  #[inline]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Runs this probe against `input`.
  #[inline]
  pub fn run(&self, input: &I) -> Option<O> {
    (self.run)(input)
  }
}

impl<I: ?Sized, O> Clone for Probe<I, O> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<I: ?Sized, O> Copy for Probe<I, O> {}

impl<I: ?Sized, O> Debug for Probe<I, O> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_tuple("Probe").field(&self.name).finish()
  }
}

/// Runs `chain` in order and returns the first value produced, together with
/// the probe that produced it.
pub fn first_match<I, O>(chain: &[Probe<I, O>], input: &I) -> Option<(&'static str, O)>
where
  I: ?Sized,
  O: Debug,
{
  for probe in chain {
    match probe.run(input) {
      Some(value) => {
        debug!(target: "procid", probe = probe.name, value = ?value, "probe matched");
        return Some((probe.name, value));
      }
      None => {
        trace!(target: "procid", probe = probe.name, "probe skipped");
      }
    }
  }

  None
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
