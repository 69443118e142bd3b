use hashbrown::HashMap;
use std::env;
use std::env::consts;
use std::process;

use crate::consts::DEFAULT_HOST_NAME;
use crate::consts::RUNTIME_NAME_SEPARATOR;
use crate::env::Property;

/// A set of host property values.
///
/// [`Properties::host`] describes the running process; [`Properties::new`]
/// starts empty, which is useful for describing some other host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
  values: HashMap<Property, String>,
}

impl Properties {
  /// Creates an empty property set.
  #[inline]
  pub fn new() -> Self {
    Self {
      values: HashMap::with_capacity(Property::ALL.len()),
    }
  }

  /// Returns the properties of the running process, with environment
  /// variable overrides applied.
  pub fn host() -> Self {
    let mut this: Self = Self::host_defaults();

    for property in Property::ALL {
      if let Some(value) = env_value(property.env_var()) {
        this.insert(property, value);
      }
    }

    this
  }

  /// Returns the properties of the running process, ignoring overrides.
  pub fn host_defaults() -> Self {
    let mut this: Self = Self::new();

    this.insert(Property::OsName, os_name(consts::OS));
    this.insert(Property::DataModel, usize::BITS.to_string());
    this.insert(Property::RuntimeName, runtime_name(process::id(), &host_name()));

    this
  }

  /// Returns `self` with `property` set to `value`.
  #[inline]
  pub fn with<T>(mut self, property: Property, value: T) -> Self
  where
    T: Into<String>,
  {
    self.insert(property, value);
    self
  }

  /// Sets `property` to `value`, returning the previous value.
  #[inline]
  pub fn insert<T>(&mut self, property: Property, value: T) -> Option<String>
  where
    T: Into<String>,
  {
    self.values.insert(property, value.into())
  }

  /// Removes `property`, returning its value.
  #[inline]
  pub fn remove(&mut self, property: Property) -> Option<String> {
    self.values.remove(&property)
  }

  /// Returns the value of `property`, if set.
  #[inline]
  pub fn get(&self, property: Property) -> Option<&str> {
    self.values.get(&property).map(String::as_str)
  }

  /// Returns the number of properties set.
  #[inline]
  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// Returns `true` if no property is set.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

/// Maps a Rust target OS onto its conventional display name.
fn os_name(target: &str) -> String {
  let name: &str = match target {
    "linux" | "android" => "Linux",
    "macos" => "Mac OS X",
    "windows" => "Windows",
    "solaris" | "illumos" => "SunOS",
    "freebsd" => "FreeBSD",
    "netbsd" => "NetBSD",
    "openbsd" => "OpenBSD",
    "dragonfly" => "DragonFlyBSD",
    "aix" => "AIX",
    other => other,
  };

  name.to_owned()
}

fn host_name() -> String {
  env_value("HOSTNAME")
    .or_else(|| env_value("COMPUTERNAME"))
    .unwrap_or_else(|| DEFAULT_HOST_NAME.to_owned())
}

fn runtime_name(pid: u32, host: &str) -> String {
  format!("{pid}{RUNTIME_NAME_SEPARATOR}{host}")
}

fn env_value(name: &str) -> Option<String> {
  env::var(name).ok().filter(|value| !value.is_empty())
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
