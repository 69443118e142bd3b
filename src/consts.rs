use std::path::Path;

// -----------------------------------------------------------------------------
// Process Identity - Sources
// -----------------------------------------------------------------------------

/// Self-referential process handle exposed by the platform pseudo-filesystem.
///
/// The canonical form of this path ends in the numeric process id.
pub const PROC_SELF_PATH: &str = "/proc/self";

/// Kernel file holding the maximum process id on Linux.
pub const PID_MAX_PATH: &str = "/proc/sys/kernel/pid_max";

/// Separator between the process id and the host in a runtime name.
pub const RUNTIME_NAME_SEPARATOR: char = '@';

// -----------------------------------------------------------------------------
// Process Identity - Fallbacks
// -----------------------------------------------------------------------------

/// Bit width of the random process id picked when no source is available.
pub const RANDOM_PID_BITS: u32 = 16;

/// Pid-space size used when the platform ceiling is unknown.
pub const DEFAULT_PID_SPACE: u64 = 1 << 16;

/// Fixed pid-space size on macOS.
pub const MAC_OS_PID_SPACE: u64 = 1 << 24;

// -----------------------------------------------------------------------------
// Environment Overrides
// -----------------------------------------------------------------------------

/// Overrides [`PROC_SELF_PATH`].
pub const ENV_PROC_SELF: &str = "PROCID_PROC_SELF";

/// Overrides [`PID_MAX_PATH`].
pub const ENV_PID_MAX: &str = "PROCID_PID_MAX";

/// Host name used in the runtime name when none can be discovered.
pub const DEFAULT_HOST_NAME: &str = "localhost";

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

#[inline]
pub(crate) fn proc_self_path() -> &'static Path {
  Path::new(PROC_SELF_PATH)
}

#[inline]
pub(crate) fn pid_max_path() -> &'static Path {
  Path::new(PID_MAX_PATH)
}
