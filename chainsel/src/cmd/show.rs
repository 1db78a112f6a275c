//! `chainsel show` command — print a chain configuration as JSON.

use std::path::Path;

use crate::chain::ChainRegistry;
use crate::config::load_config;
use crate::error::Error;

/// Execute the `show` command.
///
/// Prints the requested chain (by id, or the active chain when no id is
/// given) as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if configuration loading fails or the requested chain
/// is not configured.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path, chain_id: Option<u64>) -> Result<(), Error> {
    let config = load_config(config_path)?;
    let registry = ChainRegistry::from_chains_config(&config.chains, config.active_chain)?;

    let chain = match chain_id {
        Some(id) => registry
            .get(id)
            .ok_or_else(|| Error::chain(format!("chain {id} is not configured")))?,
        None => registry
            .active()
            .ok_or_else(|| Error::chain("no active chain"))?,
    };

    let rendered = serde_json::to_string_pretty(chain)
        .map_err(|e| Error::chain_with("failed to encode chain config", e))?;
    println!("{rendered}");
    Ok(())
}
