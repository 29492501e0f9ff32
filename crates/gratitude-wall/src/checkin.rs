//! Check-in construction and submission.

use alloy::primitives::FixedBytes;
use alloy::sol_types::SolCall;

use crate::constants::WallConfig;
use crate::error::WallError;
use crate::GratitudeWall;

/// Build the 32-byte message identifier for a check-in.
///
/// This is a lossy prefix, not a hash: the UTF-8 bytes of the message,
/// truncated to 32 bytes and zero-padded on the right. Two messages that
/// share a 32-byte prefix collide.
pub fn message_hash(message: &str) -> FixedBytes<32> {
    let bytes = message.as_bytes();
    let mut id = [0u8; 32];
    let len = bytes.len().min(32);
    id[..len].copy_from_slice(&bytes[..len]);
    FixedBytes::from(id)
}

/// Validate a message before it goes on-chain.
pub fn validate_message(message: &str, config: &WallConfig) -> Result<(), WallError> {
    if message.trim().is_empty() {
        return Err(WallError::InvalidMessage("message is empty".to_string()));
    }
    if message.chars().count() > config.max_message_chars {
        return Err(WallError::InvalidMessage(format!(
            "message exceeds {} characters",
            config.max_message_chars
        )));
    }
    Ok(())
}

/// ABI-encoded calldata for `checkIn(bytes32)`, for submission through an
/// injected provider.
pub fn check_in_calldata(message: &str) -> Vec<u8> {
    GratitudeWall::checkInCall {
        messageHash: message_hash(message),
    }
    .abi_encode()
}

/// Submit a check-in through `provider` and wait for the receipt.
///
/// Sends `checkIn(messageHash)` to the configured contract and returns the
/// transaction hash once the receipt lands. Bounded waits keep an
/// unresponsive RPC or a congested chain from hanging the caller; there is
/// no retry.
#[cfg(not(target_arch = "wasm32"))]
pub async fn submit_check_in<P: alloy::providers::Provider>(
    provider: &P,
    config: &WallConfig,
    message: &str,
) -> Result<alloy::primitives::TxHash, WallError> {
    validate_message(message, config)?;

    let contract = GratitudeWall::new(config.contract, provider);
    let pending = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        contract.checkIn(message_hash(message)).send(),
    )
    .await
    .map_err(|_| WallError::ChainError("checkIn send timed out after 30s".to_string()))?
    .map_err(|e| WallError::ChainError(format!("checkIn send failed: {e}")))?;

    let receipt = tokio::time::timeout(std::time::Duration::from_secs(60), pending.get_receipt())
        .await
        .map_err(|_| WallError::ChainError("checkIn receipt timed out after 60s".to_string()))?
        .map_err(|e| WallError::ChainError(format!("checkIn receipt failed: {e}")))?;

    if !receipt.status() {
        return Err(WallError::ChainError("checkIn reverted".to_string()));
    }

    Ok(receipt.transaction_hash)
}
