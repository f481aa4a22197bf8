use thiserror::Error;

/// Failures of a wallet-side request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("No injected wallet provider found (is MetaMask installed?)")]
    ProviderUnavailable,
    #[error("Wallet request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid asset: {0}")]
    InvalidAsset(String),
    #[error("Failed to serialize wallet payload: {0}")]
    Serialization(String),
}

/// Problems in a wallet connection config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Wallet config must declare at least one chain")]
    NoChains,
    #[error("Chain {0} is declared more than once")]
    DuplicateChain(u64),
    #[error("Chain {0} has no transport")]
    MissingTransport(u64),
    #[error("Transport configured for undeclared chain {0}")]
    UnknownTransport(u64),
    #[error("WalletConnect connector requires a non-empty project id")]
    MissingProjectId,
    #[error("Failed to parse wallet config: {0}")]
    Parse(#[from] serde_json::Error),
}
