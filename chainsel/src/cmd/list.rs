//! `chainsel list` command — list all configured chains.

use std::path::Path;

use crate::chain::ChainRegistry;
use crate::config::load_config;
use crate::error::Error;

/// Execute the `list` command.
///
/// Prints one line per registered chain; the active chain is marked with
/// an asterisk.
///
/// # Errors
///
/// Returns an error if configuration loading or registry construction
/// fails.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path) -> Result<(), Error> {
    let config = load_config(config_path)?;
    let registry = ChainRegistry::from_chains_config(&config.chains, config.active_chain)?;

    for chain in registry.chains() {
        let marker = if chain.chain_id == registry.active_chain_id() {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:>10}  {}  ({})",
            chain.chain_id, chain.inner.name, chain.inner.rpc_url
        );
    }
    Ok(())
}
