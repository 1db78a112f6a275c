//! `chainsel contracts` command — print the active chain's contract
//! addresses.

use std::path::Path;

use crate::chain::ChainRegistry;
use crate::config::load_config;
use crate::error::Error;

/// Execute the `contracts` command.
///
/// # Errors
///
/// Returns an error if configuration loading fails or no active chain is
/// registered.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path) -> Result<(), Error> {
    let config = load_config(config_path)?;
    let registry = ChainRegistry::from_chains_config(&config.chains, config.active_chain)?;

    let prediction_market = registry
        .prediction_market_address()
        .ok_or_else(|| Error::chain("no active chain"))?;
    let game_modes = registry
        .game_modes_address()
        .ok_or_else(|| Error::chain("no active chain"))?;

    println!("prediction_market: {prediction_market}");
    println!("game_modes:        {game_modes}");
    Ok(())
}
