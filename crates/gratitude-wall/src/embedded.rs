//! Embedded wallet lookup.
//!
//! Farcaster and the Base app hand the page a wallet that is already
//! connected; the session reads it instead of opening a connector dialog.

use serde::{Deserialize, Serialize};

use crate::environment::classify;
use crate::host::{EmbeddedProvider, HostRuntime};

/// Result of asking the host for an already-connected wallet.
///
/// Read once per auto-connect attempt and discarded if the attempt fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedWalletInfo {
    pub address: Option<String>,
    /// True iff `address` is present and non-empty.
    pub is_connected: bool,
    /// The host wallet that answered, for later re-resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbeddedProvider>,
}

impl EmbeddedWalletInfo {
    fn from_address(address: String, provider: EmbeddedProvider) -> Self {
        Self {
            is_connected: !address.is_empty(),
            address: Some(address),
            provider: Some(provider),
        }
    }
}

/// Query the host for an embedded wallet.
///
/// Re-detects the environment, then asks the matching host wallet for its
/// address. Never fails: a missing wallet object falls through, a rejected
/// lookup is logged and reported as "not connected".
pub async fn embedded_wallet_info<H: HostRuntime>(host: &H) -> EmbeddedWalletInfo {
    let env = classify(host.snapshot().as_ref());

    if env.is_farcaster {
        match host.wallet_address(EmbeddedProvider::Farcaster).await {
            Ok(Some(address)) => {
                return EmbeddedWalletInfo::from_address(address, EmbeddedProvider::Farcaster)
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to get Farcaster wallet info: {e}"),
        }
    }

    if env.is_base_app {
        match host.wallet_address(EmbeddedProvider::BaseApp).await {
            Ok(Some(address)) => {
                return EmbeddedWalletInfo::from_address(address, EmbeddedProvider::BaseApp)
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("failed to get Base app wallet info: {e}"),
        }
    }

    EmbeddedWalletInfo::default()
}
