use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// A named piece of host information.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Property {
  /// Operating system name, e.g. `Linux` or `Mac OS X`.
  OsName,
  /// Vendor-specific bit mode of the runtime, `32` or `64`.
  VmBitMode,
  /// Data model of the target, `32` or `64`.
  DataModel,
  /// Version string of the runtime; 64-bit builds contain `_64`.
  VmVersion,
  /// Runtime name of the form `<pid>@<host>`.
  RuntimeName,
}

impl Property {
  /// All known properties.
  pub const ALL: [Self; 5] = [
    Self::OsName,
    Self::VmBitMode,
    Self::DataModel,
    Self::VmVersion,
    Self::RuntimeName,
  ];

  /// Returns the dotted name of this property.
  #[inline]
  pub const fn key(&self) -> &'static str {
    match self {
      Self::OsName => "os.name",
      Self::VmBitMode => "vm.bitmode",
      Self::DataModel => "arch.data.model",
      Self::VmVersion => "vm.version",
      Self::RuntimeName => "runtime.name",
    }
  }

  /// Returns the environment variable overriding this property.
  #[inline]
  pub const fn env_var(&self) -> &'static str {
    match self {
      Self::OsName => "PROCID_OS_NAME",
      Self::VmBitMode => "PROCID_VM_BITMODE",
      Self::DataModel => "PROCID_DATA_MODEL",
      Self::VmVersion => "PROCID_VM_VERSION",
      Self::RuntimeName => "PROCID_RUNTIME_NAME",
    }
  }
}

impl Display for Property {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.key())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
