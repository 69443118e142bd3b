//! Process identity resolution.
//!
//! This module discovers two facts about the running process:
//!
//! - [`ProcessId`]: The OS process id, via the [`PID_PROBES`] fallback chain
//! - [`PidSpace`]: The platform pid ceiling, rounded up to a power of two
//!
//! # Process Id Sources
//!
//! 1. `proc-self`: The final segment of the canonical self-process path
//! 2. `runtime-name`: The segment before `@` in the runtime name property
//!
//! If neither source yields an id, a random 16-bit value is used and a
//! warning is logged. Uniqueness is degraded in that mode.
//!
//! # Pid Space
//!
//! | Platform | Size                                        |
//! |----------|---------------------------------------------|
//! | Linux    | `pid_max`, rounded up to a power of two     |
//! | macOS    | `2^24`                                      |
//! | Other    | `2^16`                                      |

mod pid_probe;
mod pid_space;
mod process_id;

pub use self::pid_probe::PID_PROBES;
pub use self::pid_probe::resolve_process_id;
pub use self::pid_space::PidSpace;
pub use self::pid_space::round_up_pow2;
pub use self::process_id::ProcessId;
