//! Process-wide identity of the running host.
//!
//! Every value is resolved at most once, on first use, and cached for the
//! lifetime of the process. Concurrent first calls race on a [`WriteOnce`]
//! cell; exactly one of them performs the lookup.

use std::env;
use std::path::Path;
use std::path::PathBuf;
use std::thread::AccessError;

use crate::config::HostConfig;
use crate::error::ConfigError;
use crate::ident::ThreadId;
use crate::ident::UniqueTid;
use crate::platform::OsFamily;
use crate::platform::Platform;
use crate::process::PidSpace;
use crate::process::ProcessId;
use crate::process::resolve_process_id;
use crate::tyre::sync::WriteOnce;

static CONFIG: WriteOnce<HostConfig> = WriteOnce::new();
static PLATFORM: WriteOnce<Platform> = WriteOnce::new();
static PROCESS_ID: WriteOnce<ProcessId> = WriteOnce::new();
static PID_SPACE: WriteOnce<PidSpace> = WriteOnce::new();
static TEMP_DIR: WriteOnce<PathBuf> = WriteOnce::new();

// -----------------------------------------------------------------------------
// Host
// -----------------------------------------------------------------------------

/// Identity API of the running process.
pub struct Host;

impl Host {
  // ---------------------------------------------------------------------------
  // Configuration
  // ---------------------------------------------------------------------------

  /// Installs the configuration used by every other lookup.
  ///
  /// Must be called before any other `Host` function; otherwise the
  /// configuration is already fixed to [`HostConfig::from_env`].
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::AlreadyInitialized`] if a configuration is
  /// already in place.
  pub fn configure(config: HostConfig) -> Result<(), ConfigError> {
    CONFIG
      .set(config)
      .map_err(|_| ConfigError::AlreadyInitialized)
  }

  /// Returns the configuration in use.
  #[inline]
  pub fn config() -> &'static HostConfig {
    CONFIG.get_or_init(HostConfig::from_env)
  }

  // ---------------------------------------------------------------------------
  // Platform
  // ---------------------------------------------------------------------------

  /// Returns the platform description.
  #[inline]
  pub fn platform() -> &'static Platform {
    PLATFORM.get_or_init(|| Platform::from_properties(&Self::config().properties))
  }

  /// Returns `true` on a 64-bit platform.
  #[inline]
  pub fn is_64bit() -> bool {
    Self::platform().is_64bit()
  }

  /// Returns the OS family.
  #[inline]
  pub fn os_family() -> OsFamily {
    Self::platform().os_family()
  }

  /// Returns `true` if the OS name starts with `win`.
  #[inline]
  pub fn is_windows() -> bool {
    Self::platform().is_windows()
  }

  /// Returns `true` if the OS name contains `mac`.
  #[inline]
  pub fn is_mac_os() -> bool {
    Self::platform().is_mac_os()
  }

  /// Returns `true` if the OS name starts with `linux`.
  #[inline]
  pub fn is_linux() -> bool {
    Self::platform().is_linux()
  }

  /// Returns `true` if the OS name starts with `sun`.
  #[inline]
  pub fn is_solaris() -> bool {
    Self::platform().is_solaris()
  }

  /// Returns `true` if the OS name contains a Unix token, Linux included.
  #[inline]
  pub fn is_unix() -> bool {
    Self::platform().is_unix()
  }

  // ---------------------------------------------------------------------------
  // Process Identity
  // ---------------------------------------------------------------------------

  /// Returns the process id of the running process.
  ///
  /// If no source is available a random id is picked once, with a warning,
  /// and kept for the lifetime of the process.
  #[inline]
  pub fn process_id() -> ProcessId {
    *PROCESS_ID.get_or_init(|| resolve_process_id(Self::config()))
  }

  /// Returns the pid space of the platform.
  #[inline]
  pub fn pid_space() -> PidSpace {
    *PID_SPACE.get_or_init(|| PidSpace::resolve(Self::platform(), Self::config()))
  }

  /// Returns the number of bits needed to store any process id.
  #[inline]
  pub fn pid_bits() -> u32 {
    Self::pid_space().bits()
  }

  /// Returns the packed identifier of the calling thread.
  ///
  /// # Errors
  ///
  /// Fails if called while the thread-local storage of the calling thread is
  /// being destroyed.
  #[inline]
  pub fn unique_tid() -> Result<UniqueTid, AccessError> {
    let tid: ThreadId = ThreadId::current()?;
    Ok(Self::unique_tid_for(tid.as_u32().get()))
  }

  /// Returns the packed identifier of thread `tid` in this process.
  #[inline]
  pub fn unique_tid_for(tid: u32) -> UniqueTid {
    UniqueTid::new(Self::process_id(), tid)
  }

  // ---------------------------------------------------------------------------
  // Filesystem
  // ---------------------------------------------------------------------------

  /// Returns the directory for temporary files, as seen at first use.
  #[inline]
  pub fn temp_dir() -> &'static Path {
    TEMP_DIR.get_or_init(env::temp_dir)
  }
}
