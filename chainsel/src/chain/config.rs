//! Chain configuration types and chain-id keyed TOML (de)serialisation.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Gas-token metadata for a chain's native currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Currency name (e.g. "Electroneum").
    pub name: String,
    /// Ticker symbol (e.g. "ETN").
    pub symbol: String,
    /// Decimal places of the base unit.
    pub decimals: u8,
}

/// Inner configuration for a chain (matches the TOML table structure).
///
/// URL and contract-address fields are held opaque; no well-formedness or
/// checksum validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfigInner {
    /// Human-readable network label.
    pub name: String,
    /// HTTP(S) JSON-RPC endpoint.
    pub rpc_url: String,
    /// Block explorer base URL.
    pub block_explorer_url: String,
    /// Native currency metadata.
    pub native_currency: NativeCurrency,
    /// Prediction market contract address on this chain.
    pub prediction_market_contract: String,
    /// Game modes contract address on this chain.
    pub game_modes_contract: String,
}

/// Full chain configuration with its numeric identifier.
///
/// The identifier doubles as the registry key and the TOML map key, so it
/// lives beside the table-level fields rather than inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainConfig {
    /// Numeric network identifier.
    pub chain_id: u64,
    /// Table-level configuration.
    #[serde(flatten)]
    pub inner: ChainConfigInner,
}

impl ChainConfig {
    /// The Electroneum Testnet bootstrap configuration.
    ///
    /// Every registry starts out with this entry registered and active.
    #[must_use]
    pub fn electroneum_testnet() -> Self {
        Self {
            chain_id: 5_201_420,
            inner: ChainConfigInner {
                name: "Electroneum Testnet".to_owned(),
                rpc_url: "https://rpc.ankr.com/electroneum_testnet".to_owned(),
                block_explorer_url: "https://testnet-blockexplorer.electroneum.com".to_owned(),
                native_currency: NativeCurrency {
                    name: "Electroneum".to_owned(),
                    symbol: "ETN".to_owned(),
                    decimals: 18,
                },
                prediction_market_contract: "0x93012953008ef9AbcB71F48C340166E8f384e985"
                    .to_owned(),
                game_modes_contract: "0xC44DE09ab7eEFC2a9a2116E04ca1fcEc86F520fF".to_owned(),
            },
        }
    }
}

/// Ordered collection of [`ChainConfig`] entries.
///
/// Serialised as a TOML map keyed by decimal chain identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainsConfig(pub Vec<ChainConfig>);

impl Deref for ChainsConfig {
    type Target = Vec<ChainConfig>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for ChainsConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let chains = &self.0;
        let mut map = serializer.serialize_map(Some(chains.len()))?;
        for chain_config in chains {
            map.serialize_entry(&chain_config.chain_id.to_string(), &chain_config.inner)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChainsConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{MapAccess, Visitor};

        struct ChainsVisitor;

        impl<'de> Visitor<'de> for ChainsVisitor {
            type Value = ChainsConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of chain identifiers to chain configurations")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut chains = Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some(key) = access.next_key::<String>()? {
                    let chain_id: u64 = key.parse().map_err(|_| {
                        serde::de::Error::custom(format!(
                            "invalid chain id key '{key}', expected a decimal integer"
                        ))
                    })?;
                    let inner: ChainConfigInner = access.next_value()?;
                    chains.push(ChainConfig { chain_id, inner });
                }

                Ok(ChainsConfig(chains))
            }
        }

        deserializer.deserialize_map(ChainsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_keyed_map() {
        let toml_src = r#"
            [5201420]
            name = "Electroneum Testnet"
            rpc_url = "https://rpc.ankr.com/electroneum_testnet"
            block_explorer_url = "https://testnet-blockexplorer.electroneum.com"
            prediction_market_contract = "0x93012953008ef9AbcB71F48C340166E8f384e985"
            game_modes_contract = "0xC44DE09ab7eEFC2a9a2116E04ca1fcEc86F520fF"

            [5201420.native_currency]
            name = "Electroneum"
            symbol = "ETN"
            decimals = 18
        "#;
        let chains: ChainsConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0], ChainConfig::electroneum_testnet());
    }

    #[test]
    fn rejects_non_numeric_chain_id_key() {
        let toml_src = r#"
            [mainnet]
            name = "Ethereum"
            rpc_url = "https://eth.example.com"
            block_explorer_url = "https://etherscan.io"
            prediction_market_contract = "0x0000000000000000000000000000000000000001"
            game_modes_contract = "0x0000000000000000000000000000000000000002"

            [mainnet.native_currency]
            name = "Ether"
            symbol = "ETH"
            decimals = 18
        "#;
        let err = toml::from_str::<ChainsConfig>(toml_src).unwrap_err();
        assert!(err.to_string().contains("invalid chain id key"));
    }

    #[test]
    fn serialises_back_to_decimal_keys() {
        let chains = ChainsConfig(vec![ChainConfig::electroneum_testnet()]);
        let rendered = toml::to_string(&chains).unwrap();
        assert!(rendered.contains("[5201420]"));

        let parsed: ChainsConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, chains);
    }
}
