//! Chain selection and configuration registry.
//!
//! Maps numeric chain identifiers to static network configuration records
//! (RPC endpoint, block explorer, native currency, contract addresses) and
//! tracks which chain is currently active. The registry is an explicit
//! value passed by reference; there is no global state.
//!
//! ```
//! use chainsel::chain::ChainRegistry;
//!
//! let registry = ChainRegistry::new();
//! assert_eq!(registry.active_chain_id(), 5_201_420);
//! assert!(registry.is_supported(5_201_420));
//! ```

pub mod chain;
pub mod cmd;
pub mod config;
pub mod error;
pub mod telemetry;
