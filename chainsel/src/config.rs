//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — Top-level TOML file contents: the chain map plus the
//!   active-chain selection.
//! - [`load_config`] — Reads and parses a TOML configuration file.
//! - [`generate_default_config`] — Produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! active_chain = 5201420
//!
//! [chains.5201420]
//! name = "Electroneum Testnet"
//! rpc_url = "https://rpc.ankr.com/electroneum_testnet"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::chain::ChainsConfig;
use crate::error::Error;

/// Top-level configuration file contents.
///
/// Both fields default, so an empty file yields the seeded registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Chain to mark active after loading; `None` keeps the seeded default.
    #[serde(default)]
    pub active_chain: Option<u64>,
    /// Chain entries, keyed by decimal chain id.
    #[serde(default)]
    pub chains: ChainsConfig,
}

/// Load configuration from a TOML file at the given path.
///
/// `rpc_url` values support environment variable references (`$VAR` or
/// `${VAR}`), resolved after parsing.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed, or if
/// a referenced environment variable is not set.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(format!("failed to resolve config path '{}'", path.display()), e)
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let mut config: Config = toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML config '{}'", config_path.display()),
            e,
        )
    })?;

    for chain in &mut config.chains.0 {
        chain.inner.rpc_url = resolve_env(&chain.inner.rpc_url)?;
    }

    tracing::debug!(
        chains = config.chains.len(),
        path = %config_path.display(),
        "configuration loaded"
    );
    Ok(config)
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
fn resolve_env(value: &str) -> Result<String, Error> {
    // ${VAR} syntax
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        return std::env::var(var_name).map_err(|_| {
            Error::config(format!(
                "env var '{var_name}' not found (referenced as '{value}')"
            ))
        });
    }
    // $VAR syntax
    if value.starts_with('$') && value.len() > 1 {
        let var_name = &value[1..];
        if var_name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return std::env::var(var_name).map_err(|_| {
                Error::config(format!(
                    "env var '{var_name}' not found (referenced as '{value}')"
                ))
            });
        }
    }
    // Literal value
    Ok(value.to_owned())
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# chainsel configuration

# Chain to mark active after loading. Must name a configured chain.
active_chain = 5201420

# ── Chain entries ───────────────────────────────────────────────────
# Key format: decimal chain id.
# rpc_url supports environment variable references: "$VAR" or "${VAR}"

[chains.5201420]
name = "Electroneum Testnet"
rpc_url = "https://rpc.ankr.com/electroneum_testnet"
block_explorer_url = "https://testnet-blockexplorer.electroneum.com"
prediction_market_contract = "0x93012953008ef9AbcB71F48C340166E8f384e985"
game_modes_contract = "0xC44DE09ab7eEFC2a9a2116E04ca1fcEc86F520fF"

[chains.5201420.native_currency]
name = "Electroneum"
symbol = "ETN"
decimals = 18
"#,
    )
}
