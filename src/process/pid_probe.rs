use rand::Rng;
use std::fs;
use std::path::PathBuf;
use tracing::trace;
use tracing::warn;

use crate::config::HostConfig;
use crate::consts::RUNTIME_NAME_SEPARATOR;
use crate::env::Property;
use crate::probe::Probe;
use crate::probe::first_match;
use crate::process::ProcessId;

/// Ordered sources for the process id of the running process.
pub const PID_PROBES: &[Probe<HostConfig, ProcessId>] = &[
  Probe::new("proc-self", probe_proc_self),
  Probe::new("runtime-name", probe_runtime_name),
];

/// Resolves the process id described by `config`.
///
/// This never fails. When every source in [`PID_PROBES`] is unavailable a
/// random id below `2^random_pid_bits` is returned and a warning is logged.
pub fn resolve_process_id(config: &HostConfig) -> ProcessId {
  match first_match(PID_PROBES, config) {
    Some((_, pid)) => pid,
    None => random_process_id(config.random_pid_bits),
  }
}

/// Reads the final segment of the canonical self-process path.
fn probe_proc_self(config: &HostConfig) -> Option<ProcessId> {
  let path: PathBuf = fs::canonicalize(&config.proc_self_path)
    .inspect_err(|error| {
      trace!(
        target: "procid",
        path = %config.proc_self_path.display(),
        error = %error,
        "self-process path unavailable",
      );
    })
    .ok()?;

  path.file_name()?.to_str()?.parse().ok()
}

/// Reads the segment before `@` in the runtime name.
fn probe_runtime_name(config: &HostConfig) -> Option<ProcessId> {
  let name: &str = config.properties.get(Property::RuntimeName)?;
  let pid: &str = name.split(RUNTIME_NAME_SEPARATOR).next()?;

  pid.parse().ok()
}

#[cold]
fn random_process_id(bits: u32) -> ProcessId {
  // Largest id of a `bits` wide space, capped at `i32::MAX`.
  let max: i32 = i32::MAX >> (i32::BITS - 1 - bits.clamp(1, i32::BITS - 1));
  let pid: i32 = rand::rng().random_range(0..=max);

  warn!(
    target: "procid",
    pid,
    "unable to determine process id, picked a random number; uniqueness is degraded",
  );

  ProcessId::from_bits(pid)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
