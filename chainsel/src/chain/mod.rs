//! Blockchain network types, configuration, and selection registry.
//!
//! - [`config`] — [`ChainConfig`] types and chain-id keyed TOML
//!   (de)serialisation.
//! - [`registry`] — [`ChainRegistry`] lookup and active-selection state.

mod config;
mod registry;

pub use self::config::*;
pub use self::registry::*;
