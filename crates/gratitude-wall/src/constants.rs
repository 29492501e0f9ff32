use alloy::primitives::Address;
use url::Url;

use crate::error::WallError;

/// Base mainnet chain ID.
pub const BASE_CHAIN_ID: u64 = 8453;

/// CAIP-2 network identifier for Base mainnet.
pub const BASE_NETWORK: &str = "eip155:8453";

/// GratitudeWall contract address on Base.
pub const CONTRACT_ADDRESS: Address = Address::new([
    0x61, 0x02, 0x6a, 0x5c, 0xf6, 0xf7, 0xf8, 0x3c, 0xc6, 0xc6, 0x22, 0xb1, 0xbb, 0xa7, 0xb3, 0xa4,
    0x82, 0x7b, 0x80, 0x26,
]);

/// Default RPC endpoint for Base mainnet.
pub const RPC_URL: &str = "https://mainnet.base.org";

/// Block explorer base URL.
pub const EXPLORER_BASE: &str = "https://basescan.org";

/// Warpcast compose endpoint used as the share fallback.
pub const COMPOSE_BASE: &str = "https://warpcast.com/~/compose";

/// Wait before the auto-connect attempt so host SDK injection can finish.
pub const SETTLE_DELAY_MS: u64 = 500;

/// Connector name fragment identifying the primary wallet provider.
pub const PRIMARY_CONNECTOR: &str = "coinbase";

/// Maximum check-in message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 280;

/// Runtime configuration. Decouples the session, submission, and share
/// logic from compile-time constants, enabling test and staging deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallConfig {
    pub chain_id: u64,
    pub network: String,
    pub contract: Address,
    pub rpc_url: String,
    pub explorer_base: String,
    pub compose_base: String,
    pub settle_delay_ms: u64,
    pub primary_connector: String,
    pub max_message_chars: usize,
}

impl Default for WallConfig {
    /// Defaults to the Base mainnet deployment.
    fn default() -> Self {
        Self {
            chain_id: BASE_CHAIN_ID,
            network: BASE_NETWORK.to_string(),
            contract: CONTRACT_ADDRESS,
            rpc_url: RPC_URL.to_string(),
            explorer_base: EXPLORER_BASE.to_string(),
            compose_base: COMPOSE_BASE.to_string(),
            settle_delay_ms: SETTLE_DELAY_MS,
            primary_connector: PRIMARY_CONNECTOR.to_string(),
            max_message_chars: MAX_MESSAGE_CHARS,
        }
    }
}

impl WallConfig {
    /// Validate the configured endpoints. Call after building a non-default
    /// config; the compiled defaults are known-good.
    pub fn validate(&self) -> Result<(), WallError> {
        for (name, value) in [
            ("rpc_url", &self.rpc_url),
            ("explorer_base", &self.explorer_base),
            ("compose_base", &self.compose_base),
        ] {
            Url::parse(value)
                .map_err(|_| WallError::ConfigError(format!("invalid {name}: {value}")))?;
        }
        Ok(())
    }
}
