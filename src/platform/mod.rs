//! Operating system and bitness classification.
//!
//! The platform is described by two string-derived facts:
//!
//! - [`OsFamily`]: Exclusive classification of the OS name
//! - [`PlatformFlags`]: Independent capability predicates over the OS name
//!
//! plus a 64-vs-32-bit determination made by the [`BITNESS_PROBES`] chain.
//! [`Platform`] bundles the three.
//!
//! # Families vs Flags
//!
//! Families are checked in a fixed order and the first match wins, so an OS
//! named `Linux` is [`OsFamily::Linux`] and never [`OsFamily::OtherUnix`].
//! Flags are evaluated independently: the same OS also carries
//! [`PlatformFlags::UNIX`] because its name contains `nux`.

mod bitness;
mod os_family;
mod platform_flags;
mod platform_info;

pub use self::bitness::BITNESS_PROBES;
pub use self::bitness::is_64bit;
pub use self::os_family::OsFamily;
pub use self::platform_flags::PlatformFlags;
pub use self::platform_info::Platform;
