use std::env;
use std::path::PathBuf;

use crate::consts;
use crate::env::Properties;
use crate::process::PidSpace;

// -----------------------------------------------------------------------------
// Host Config
// -----------------------------------------------------------------------------

/// Sources and fallbacks used to resolve the identity of the host process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
  // ---------------------------------------------------------------------------
  // Process Id Sources
  // ---------------------------------------------------------------------------
  pub proc_self_path: PathBuf,
  pub properties: Properties,
  pub random_pid_bits: u32,
  // ---------------------------------------------------------------------------
  // Pid Space Sources
  // ---------------------------------------------------------------------------
  pub pid_max_path: PathBuf,
  pub default_pid_space: PidSpace,
  pub mac_os_pid_space: PidSpace,
}

impl HostConfig {
  /// Returns the built-in configuration for the running process.
  ///
  /// Environment overrides are ignored, see [`HostConfig::from_env`].
  #[inline]
  pub fn new() -> Self {
    Self {
      proc_self_path: consts::proc_self_path().to_path_buf(),
      properties: Properties::host_defaults(),
      random_pid_bits: consts::RANDOM_PID_BITS,
      pid_max_path: consts::pid_max_path().to_path_buf(),
      default_pid_space: PidSpace::DEFAULT,
      mac_os_pid_space: PidSpace::MAC_OS,
    }
  }

  /// Returns the configuration for the running process with environment
  /// overrides applied.
  ///
  /// - [`ENV_PROC_SELF`] replaces the self-process path
  /// - [`ENV_PID_MAX`] replaces the pid ceiling path
  /// - `PROCID_*` property variables replace host properties
  ///
  /// [`ENV_PROC_SELF`]: consts::ENV_PROC_SELF
  /// [`ENV_PID_MAX`]: consts::ENV_PID_MAX
  pub fn from_env() -> Self {
    let mut this: Self = Self::new();

    if let Some(path) = env_path(consts::ENV_PROC_SELF) {
      this.proc_self_path = path;
    }

    if let Some(path) = env_path(consts::ENV_PID_MAX) {
      this.pid_max_path = path;
    }

    this.properties = Properties::host();
    this
  }
}

impl Default for HostConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

fn env_path(name: &str) -> Option<PathBuf> {
  env::var_os(name)
    .filter(|value| !value.is_empty())
    .map(PathBuf::from)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
