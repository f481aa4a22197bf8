//! Wallet connection config: which chains the app talks to, which wallet
//! connectors it offers, and how each chain is reached.
//!
//! The app uses a single process-wide instance, [`wallet_config`], built on
//! first access and read-only afterwards. The CSR shell provides it as
//! context; components fall back to the global when no context exists.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Sepolia test network chain id
pub const SEPOLIA_ID: u64 = 11_155_111;

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// A chain the app can connect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: u64,
    pub name: String,
    /// Short network slug, e.g. `sepolia`
    pub network: String,
    pub native_currency: NativeCurrency,
    /// Public RPC endpoint used when the transport has no explicit URL
    pub rpc_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer: Option<String>,
    #[serde(default)]
    pub testnet: bool,
}

impl Chain {
    /// The Sepolia public test network.
    pub fn sepolia() -> Self {
        Self {
            id: SEPOLIA_ID,
            name: "Sepolia".into(),
            network: "sepolia".into(),
            native_currency: NativeCurrency {
                name: "Sepolia Ether".into(),
                symbol: "ETH".into(),
                decimals: 18,
            },
            rpc_url: "https://rpc.sepolia.org".into(),
            block_explorer: Some("https://sepolia.etherscan.io".into()),
            testnet: true,
        }
    }

    /// Explorer link for an address on this chain, if the chain has an explorer.
    pub fn address_url(&self, address: &str) -> Option<String> {
        self.block_explorer
            .as_ref()
            .map(|base| format!("{}/address/{}", base.trim_end_matches('/'), address))
    }
}

/// Strategy for establishing a wallet session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Connector {
    /// Any EIP-1193 provider injected into `window.ethereum`
    Injected,
    /// MetaMask's provider specifically
    MetaMask,
    /// WalletConnect relay; needs a cloud project id
    #[serde(rename_all = "camelCase")]
    WalletConnect { project_id: String },
}

impl Connector {
    /// Human-readable connector name.
    pub fn label(&self) -> &'static str {
        match self {
            Connector::Injected => "Browser Wallet",
            Connector::MetaMask => "MetaMask",
            Connector::WalletConnect { .. } => "WalletConnect",
        }
    }
}

/// How requests reach a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Transport {
    /// JSON-RPC over HTTP; `None` uses the chain's default RPC URL
    Http {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Transport {
    /// HTTP transport against the chain's default RPC URL.
    pub fn http() -> Self {
        Transport::Http { url: None }
    }
}

/// Chains, connectors and per-chain transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    pub chains: Vec<Chain>,
    pub connectors: Vec<Connector>,
    pub transports: BTreeMap<u64, Transport>,
}

static WALLET_CONFIG: LazyLock<WalletConfig> = LazyLock::new(WalletConfig::default);

/// The process-wide wallet config.
pub fn wallet_config() -> &'static WalletConfig {
    &WALLET_CONFIG
}

impl Default for WalletConfig {
    /// Sepolia only, injected and MetaMask connectors, default HTTP transport.
    ///
    /// A WalletConnect connector needs a project id and is added through
    /// [`WalletConfigBuilder::connector`] when one is available.
    fn default() -> Self {
        let sepolia = Chain::sepolia();
        let transports = BTreeMap::from([(sepolia.id, Transport::http())]);
        Self {
            chains: vec![sepolia],
            connectors: vec![Connector::Injected, Connector::MetaMask],
            transports,
        }
    }
}

impl WalletConfig {
    /// Start an empty builder.
    pub fn builder() -> WalletConfigBuilder {
        WalletConfigBuilder::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WalletConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the structural rules: at least one chain, unique chain ids,
    /// exactly one transport per declared chain, and a project id on every
    /// WalletConnect connector.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chains.is_empty() {
            return Err(ConfigError::NoChains);
        }

        let mut ids = HashSet::new();
        for chain in &self.chains {
            if !ids.insert(chain.id) {
                return Err(ConfigError::DuplicateChain(chain.id));
            }
            if !self.transports.contains_key(&chain.id) {
                return Err(ConfigError::MissingTransport(chain.id));
            }
        }
        if let Some(orphan) = self.transports.keys().find(|id| !ids.contains(*id)) {
            return Err(ConfigError::UnknownTransport(*orphan));
        }

        let blank_project_id = self.connectors.iter().any(|connector| {
            matches!(connector, Connector::WalletConnect { project_id } if project_id.trim().is_empty())
        });
        if blank_project_id {
            return Err(ConfigError::MissingProjectId);
        }
        Ok(())
    }

    /// First declared chain; the one the app connects to by default.
    pub fn default_chain(&self) -> Option<&Chain> {
        self.chains.first()
    }

    pub fn chain(&self, id: u64) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.id == id)
    }

    /// RPC URL requests for `chain_id` go to: the transport's explicit URL,
    /// else the chain's default.
    pub fn rpc_url(&self, chain_id: u64) -> Option<&str> {
        let chain = self.chain(chain_id)?;
        match self.transports.get(&chain_id)? {
            Transport::Http { url: Some(url) } => Some(url.as_str()),
            Transport::Http { url: None } => Some(chain.rpc_url.as_str()),
        }
    }
}

/// Incremental construction of a [`WalletConfig`], validated on
/// [`build`](WalletConfigBuilder::build).
#[derive(Debug, Default)]
pub struct WalletConfigBuilder {
    chains: Vec<Chain>,
    connectors: Vec<Connector>,
    transports: BTreeMap<u64, Transport>,
}

impl WalletConfigBuilder {
    pub fn chain(mut self, chain: Chain) -> Self {
        self.chains.push(chain);
        self
    }

    pub fn connector(mut self, connector: Connector) -> Self {
        self.connectors.push(connector);
        self
    }

    /// Set the transport for `chain_id`, replacing any earlier one.
    pub fn transport(mut self, chain_id: u64, transport: Transport) -> Self {
        self.transports.insert(chain_id, transport);
        self
    }

    pub fn build(self) -> Result<WalletConfig, ConfigError> {
        let config = WalletConfig {
            chains: self.chains,
            connectors: self.connectors,
            transports: self.transports,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn global_config_has_one_chain_and_matching_transport() {
        let config = wallet_config();

        assert_eq!(config.chains.len(), 1);
        assert_eq!(config.transports.len(), 1);
        let chain = &config.chains[0];
        assert!(chain.testnet);
        assert!(config.transports.contains_key(&chain.id));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn global_config_is_a_singleton() {
        assert!(std::ptr::eq(wallet_config(), wallet_config()));
    }

    #[test]
    fn default_connectors_are_injected_then_metamask() {
        let config = WalletConfig::default();
        assert_eq!(
            config.connectors,
            vec![Connector::Injected, Connector::MetaMask]
        );
        assert!(
            !config
                .connectors
                .iter()
                .any(|c| matches!(c, Connector::WalletConnect { .. }))
        );
    }

    #[test]
    fn rpc_url_falls_back_to_chain_default() {
        let config = WalletConfig::default();
        assert_eq!(config.rpc_url(SEPOLIA_ID), Some("https://rpc.sepolia.org"));
        assert_eq!(config.rpc_url(1), None);

        let custom = WalletConfig::builder()
            .chain(Chain::sepolia())
            .transport(
                SEPOLIA_ID,
                Transport::Http {
                    url: Some("https://sepolia.example.org".into()),
                },
            )
            .build()
            .unwrap();
        assert_eq!(
            custom.rpc_url(SEPOLIA_ID),
            Some("https://sepolia.example.org")
        );
    }

    #[test]
    fn builder_rejects_structural_errors() {
        assert!(matches!(
            WalletConfig::builder().build(),
            Err(ConfigError::NoChains)
        ));

        assert!(matches!(
            WalletConfig::builder().chain(Chain::sepolia()).build(),
            Err(ConfigError::MissingTransport(SEPOLIA_ID))
        ));

        assert!(matches!(
            WalletConfig::builder()
                .chain(Chain::sepolia())
                .chain(Chain::sepolia())
                .transport(SEPOLIA_ID, Transport::http())
                .build(),
            Err(ConfigError::DuplicateChain(SEPOLIA_ID))
        ));

        assert!(matches!(
            WalletConfig::builder()
                .chain(Chain::sepolia())
                .transport(SEPOLIA_ID, Transport::http())
                .transport(1, Transport::http())
                .build(),
            Err(ConfigError::UnknownTransport(1))
        ));
    }

    #[test]
    fn wallet_connect_needs_project_id() {
        let base = || {
            WalletConfig::builder()
                .chain(Chain::sepolia())
                .transport(SEPOLIA_ID, Transport::http())
        };

        assert!(matches!(
            base()
                .connector(Connector::WalletConnect {
                    project_id: "  ".into()
                })
                .build(),
            Err(ConfigError::MissingProjectId)
        ));

        let config = base()
            .connector(Connector::Injected)
            .connector(Connector::WalletConnect {
                project_id: "a1b2c3".into(),
            })
            .build()
            .unwrap();
        assert_eq!(config.connectors[1].label(), "WalletConnect");
    }

    #[test]
    fn json_config_round_trips_and_validates() {
        let json = serde_json::to_string(wallet_config()).unwrap();
        assert!(json.contains("\"nativeCurrency\""));
        assert!(json.contains("\"type\":\"metaMask\""));

        let parsed = WalletConfig::from_json(&json).unwrap();
        assert_eq!(&parsed, wallet_config());

        let broken = r#"{"chains":[],"connectors":[],"transports":{}}"#;
        assert!(matches!(
            WalletConfig::from_json(broken),
            Err(ConfigError::NoChains)
        ));
        assert!(matches!(
            WalletConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn explorer_links() {
        let chain = Chain::sepolia();
        assert_eq!(
            chain.address_url("0xabc").as_deref(),
            Some("https://sepolia.etherscan.io/address/0xabc")
        );
    }
}
