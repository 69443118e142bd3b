//! Environment inputs consumed by the identity resolvers.
//!
//! Platform classification and process-id discovery read a handful of string
//! properties describing the host. This module names those properties and
//! provides a map of their values:
//!
//! - [`Property`]: Typed property key
//! - [`Properties`]: Property values, built from host defaults and
//!   environment-variable overrides
//!
//! # Overrides
//!
//! Every property can be overridden with an environment variable, see
//! [`Property::env_var`]. An empty variable is treated as unset.

mod properties;
mod property;

pub use self::properties::Properties;
pub use self::property::Property;
