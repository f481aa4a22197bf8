//! Wallet connectivity: the process-wide connection config and the
//! MetaMask watch-asset request.

mod config;
mod error;
mod provider;
mod watch_asset;

pub use config::{
    Chain, Connector, NativeCurrency, SEPOLIA_ID, Transport, WalletConfig, WalletConfigBuilder,
    wallet_config,
};
pub use error::{ConfigError, WalletError};
pub use provider::{InjectedProvider, WalletProvider};
pub use watch_asset::{
    WATCH_ASSET_METHOD, WatchAsset, add_token_to_metamask, add_token_with, watch_asset,
};
