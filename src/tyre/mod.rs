//! A collection of utilities for concurrent programming.

pub mod sync;
