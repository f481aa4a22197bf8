//! `wallet_watchAsset` (EIP-747): ask the user's wallet to track an ERC-20.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::error::WalletError;
use super::provider::{InjectedProvider, WalletProvider};

/// RPC method name for suggesting a token to the wallet
pub const WATCH_ASSET_METHOD: &str = "wallet_watchAsset";

// MetaMask's limits for suggested tokens
const MAX_SYMBOL_LEN: usize = 11;
const MAX_DECIMALS: u8 = 36;

/// A validated `wallet_watchAsset` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchAsset {
    #[serde(rename = "type")]
    kind: &'static str,
    options: WatchAssetOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct WatchAssetOptions {
    address: String,
    symbol: String,
    decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl WatchAsset {
    /// ERC-20 payload. The address must be `0x` plus 40 hex digits, the
    /// symbol 1 to 11 characters, and decimals at most 36.
    pub fn new(address: &str, symbol: &str, decimals: u8) -> Result<Self, WalletError> {
        let hex = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .ok_or_else(|| WalletError::InvalidAsset(format!("address {address} lacks 0x prefix")))?;
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletError::InvalidAsset(format!(
                "address {address} is not 20 bytes of hex"
            )));
        }

        let symbol_len = symbol.chars().count();
        if symbol_len == 0 || symbol_len > MAX_SYMBOL_LEN {
            return Err(WalletError::InvalidAsset(format!(
                "symbol {symbol:?} must be 1 to {MAX_SYMBOL_LEN} characters"
            )));
        }

        if decimals > MAX_DECIMALS {
            return Err(WalletError::InvalidAsset(format!(
                "decimals {decimals} exceeds {MAX_DECIMALS}"
            )));
        }

        Ok(Self {
            kind: "ERC20",
            options: WatchAssetOptions {
                address: address.to_string(),
                symbol: symbol.to_string(),
                decimals,
                image: None,
            },
        })
    }

    /// Attach a token icon URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.options.image = Some(url.into());
        self
    }

    pub fn address(&self) -> &str {
        &self.options.address
    }

    pub fn symbol(&self) -> &str {
        &self.options.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.options.decimals
    }
}

/// Send `wallet_watchAsset` through `provider`.
///
/// Resolves to the wallet's answer: `true` when the token was added.
pub async fn watch_asset<P: WalletProvider>(
    provider: &P,
    asset: &WatchAsset,
) -> Result<bool, WalletError> {
    let params =
        serde_json::to_value(asset).map_err(|e| WalletError::Serialization(e.to_string()))?;
    debug!(symbol = asset.symbol(), address = asset.address(), "requesting {WATCH_ASSET_METHOD}");

    let answer = provider.request(WATCH_ASSET_METHOD, params).await?;
    Ok(answer.as_bool().unwrap_or(false))
}

/// Ask the injected browser wallet to track a token.
///
/// Best effort: a missing wallet, an invalid asset or a rejected request is
/// logged and dropped. Nothing is returned, so callers cannot tell an added
/// token from a silent failure.
pub async fn add_token_to_metamask(address: &str, symbol: &str, decimals: u8) {
    let provider = InjectedProvider::detect();
    if provider.as_ref().is_some_and(|injected| !injected.is_metamask()) {
        warn!("injected wallet is not MetaMask; sending {WATCH_ASSET_METHOD} anyway");
    }
    add_token_with(provider.as_ref(), address, symbol, decimals).await;
}

/// [`add_token_to_metamask`] against an explicit provider. `None` behaves
/// like a browser without a wallet.
pub async fn add_token_with<P: WalletProvider>(
    provider: Option<&P>,
    address: &str,
    symbol: &str,
    decimals: u8,
) {
    match try_add_token(provider, address, symbol, decimals).await {
        Ok(true) => info!(symbol, "token added to wallet"),
        Ok(false) => info!(symbol, "wallet did not add token"),
        Err(err) => error!(symbol, "failed to add token to wallet: {err}"),
    }
}

async fn try_add_token<P: WalletProvider>(
    provider: Option<&P>,
    address: &str,
    symbol: &str,
    decimals: u8,
) -> Result<bool, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderUnavailable)?;
    let asset = WatchAsset::new(address, symbol, decimals)?;
    watch_asset(provider, &asset).await
}
