//! In-memory chain registry with a single active selection.

use std::collections::HashMap;

use super::config::{ChainConfig, ChainsConfig};
use crate::error::Error;

/// Registry of known chain configurations and the currently active chain.
///
/// A plain value, constructed once and passed by reference to whatever
/// consumes it. All operations are synchronous map accesses; callers that
/// share a registry across threads must supply their own synchronisation.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: HashMap<u64, ChainConfig>,
    active_chain_id: u64,
}

impl ChainRegistry {
    /// Creates a registry seeded with the Electroneum Testnet entry, which
    /// is also marked active.
    #[must_use]
    pub fn new() -> Self {
        let seed = ChainConfig::electroneum_testnet();
        let active_chain_id = seed.chain_id;
        let mut chains = HashMap::new();
        chains.insert(seed.chain_id, seed);
        Self {
            chains,
            active_chain_id,
        }
    }

    /// Builds a registry from configured chain entries.
    ///
    /// Starts from the seeded default, upserts every entry in `chains`,
    /// then applies `active_chain` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if `active_chain` names a chain that is not
    /// registered.
    pub fn from_chains_config(
        chains: &ChainsConfig,
        active_chain: Option<u64>,
    ) -> Result<Self, Error> {
        let mut registry = Self::new();
        for chain in chains.iter() {
            registry.upsert(chain.clone());
        }
        if let Some(chain_id) = active_chain
            && !registry.set_active(chain_id)
        {
            return Err(Error::chain(format!(
                "active_chain {chain_id} is not a configured chain"
            )));
        }
        Ok(registry)
    }

    /// Iterates over all registered chain configurations, in no particular
    /// order.
    pub fn chains(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chains.values()
    }

    /// Looks up a chain configuration by identifier.
    #[must_use]
    pub fn get(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.get(&chain_id)
    }

    /// Returns the currently active chain configuration.
    ///
    /// `None` means the active identifier does not resolve to a registered
    /// entry. No operation on this type can produce that state, but callers
    /// are made to handle it rather than trust the invariant.
    #[must_use]
    pub fn active(&self) -> Option<&ChainConfig> {
        self.chains.get(&self.active_chain_id)
    }

    /// Returns the raw active chain identifier, whether or not it resolves.
    #[must_use]
    pub const fn active_chain_id(&self) -> u64 {
        self.active_chain_id
    }

    /// Marks `chain_id` active.
    ///
    /// Returns `false` and leaves the selection unchanged if no such chain
    /// is registered. This is the only validated mutation.
    pub fn set_active(&mut self, chain_id: u64) -> bool {
        if self.chains.contains_key(&chain_id) {
            self.active_chain_id = chain_id;
            true
        } else {
            false
        }
    }

    /// Inserts `config` under its chain identifier, replacing any previous
    /// entry unconditionally.
    ///
    /// The active selection is never touched: overwriting the active entry
    /// changes the data the selection resolves to, in place.
    pub fn upsert(&mut self, config: ChainConfig) {
        self.chains.insert(config.chain_id, config);
    }

    /// Whether a chain with this identifier is registered.
    #[must_use]
    pub fn is_supported(&self, chain_id: u64) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Game modes contract address on the active chain.
    ///
    /// `None` exactly when [`active`](Self::active) is `None`.
    #[must_use]
    pub fn game_modes_address(&self) -> Option<&str> {
        self.active().map(|c| c.inner.game_modes_contract.as_str())
    }

    /// Prediction market contract address on the active chain.
    ///
    /// `None` exactly when [`active`](Self::active) is `None`.
    #[must_use]
    pub fn prediction_market_address(&self) -> Option<&str> {
        self.active()
            .map(|c| c.inner.prediction_market_contract.as_str())
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainConfigInner, NativeCurrency};

    fn test_chain(chain_id: u64, name: &str) -> ChainConfig {
        ChainConfig {
            chain_id,
            inner: ChainConfigInner {
                name: name.to_owned(),
                rpc_url: format!("https://rpc.example.com/{chain_id}"),
                block_explorer_url: format!("https://explorer.example.com/{chain_id}"),
                native_currency: NativeCurrency {
                    name: "Ether".to_owned(),
                    symbol: "ETH".to_owned(),
                    decimals: 18,
                },
                prediction_market_contract: "0x0000000000000000000000000000000000000001"
                    .to_owned(),
                game_modes_contract: "0x0000000000000000000000000000000000000002".to_owned(),
            },
        }
    }

    #[test]
    fn seeds_electroneum_testnet() {
        let registry = ChainRegistry::new();
        let chains: Vec<_> = registry.chains().collect();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].chain_id, 5_201_420);
        assert_eq!(registry.active_chain_id(), 5_201_420);
        assert_eq!(
            registry.game_modes_address(),
            Some("0xC44DE09ab7eEFC2a9a2116E04ca1fcEc86F520fF")
        );
        assert_eq!(
            registry.prediction_market_address(),
            Some("0x93012953008ef9AbcB71F48C340166E8f384e985")
        );
    }

    #[test]
    fn absent_chain_is_none_and_unsupported() {
        let registry = ChainRegistry::new();
        assert!(registry.get(1).is_none());
        assert!(!registry.is_supported(1));
    }

    #[test]
    fn upsert_then_get_returns_equal_config() {
        let mut registry = ChainRegistry::new();
        let chain = test_chain(1, "Ethereum");
        registry.upsert(chain.clone());
        assert_eq!(registry.get(1), Some(&chain));
        assert!(registry.is_supported(1));
    }

    #[test]
    fn set_active_requires_known_chain() {
        let mut registry = ChainRegistry::new();
        assert!(!registry.set_active(1));
        assert_eq!(registry.active_chain_id(), 5_201_420);

        registry.upsert(test_chain(1, "Ethereum"));
        assert!(registry.set_active(1));
        assert_eq!(registry.active_chain_id(), 1);
        assert_eq!(
            registry.active().map(|c| c.inner.name.as_str()),
            Some("Ethereum")
        );
    }

    #[test]
    fn upsert_over_active_replaces_resolved_data() {
        let mut registry = ChainRegistry::new();
        let replacement = test_chain(5_201_420, "Electroneum Testnet (patched)");
        registry.upsert(replacement.clone());

        // Active pointer untouched, but it now resolves to the new record.
        assert_eq!(registry.active_chain_id(), 5_201_420);
        assert_eq!(registry.active(), Some(&replacement));
        assert_eq!(
            registry.prediction_market_address(),
            Some("0x0000000000000000000000000000000000000001")
        );
    }

    #[test]
    fn reads_are_idempotent() {
        let registry = ChainRegistry::new();
        assert_eq!(registry.get(5_201_420), registry.get(5_201_420));
        let first: Vec<_> = registry.chains().collect();
        let second: Vec<_> = registry.chains().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn from_chains_config_applies_entries_and_selection() {
        let chains = ChainsConfig(vec![test_chain(1, "Ethereum")]);
        let registry = ChainRegistry::from_chains_config(&chains, Some(1)).unwrap();
        assert!(registry.is_supported(5_201_420));
        assert!(registry.is_supported(1));
        assert_eq!(registry.active_chain_id(), 1);
    }

    #[test]
    fn from_chains_config_rejects_unknown_selection() {
        let err = ChainRegistry::from_chains_config(&ChainsConfig::default(), Some(42))
            .unwrap_err();
        assert!(matches!(err, Error::Chain(_)));
    }

    #[test]
    fn from_chains_config_defaults_to_seeded_selection() {
        let chains = ChainsConfig(vec![test_chain(1, "Ethereum")]);
        let registry = ChainRegistry::from_chains_config(&chains, None).unwrap();
        assert_eq!(registry.active_chain_id(), 5_201_420);
    }
}
