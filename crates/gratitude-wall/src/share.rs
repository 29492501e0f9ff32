//! Farcaster share cascade.
//!
//! Formats the post once and walks the channels in order of fidelity: the
//! Farcaster compose action, the Base app share sheet, the platform share
//! capability, and finally a pre-filled Warpcast compose URL in a new
//! browsing context. Share failures never surface to the user; a rejected
//! channel drops straight to the fallback URL.

use crate::constants::WallConfig;
use crate::environment::{classify, EnvironmentInfo};
use crate::error::WallError;
use crate::host::{Dispatch, HostRuntime};

/// Title passed to the platform share capability.
const SHARE_TITLE: &str = "My Gratitude";

/// Which channel carried the share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    /// Farcaster mini app `composeCast` action.
    ComposeCast,
    /// Base app `share` action.
    AppShare,
    /// Platform share capability.
    PlatformShare,
    /// Pre-filled Warpcast compose URL.
    ComposeUrl,
}

/// Post body for a shared check-in.
pub fn compose_post_text(gratitude: &str) -> String {
    format!("🙏 Today I'm grateful for: {gratitude}\n\n#GratitudeWall #Base #OnChain")
}

/// Explorer link for a submitted transaction, used as the cast embed.
pub fn transaction_url(config: &WallConfig, tx_hash: &str) -> String {
    format!("{}/tx/{}", config.explorer_base, tx_hash)
}

/// Pre-filled Warpcast compose URL with the post text and one embed.
///
/// The `embeds[]` key is spelled literally; the compose endpoint expects
/// the brackets unencoded.
pub fn compose_url(config: &WallConfig, text: &str, embed: &str) -> String {
    format!(
        "{}?text={}&embeds[]={}",
        config.compose_base,
        urlencoding::encode(text),
        urlencoding::encode(embed)
    )
}

/// Share a confirmed check-in, reporting the channel that carried it.
///
/// Never fails: a rejected channel logs a warning and falls back to the
/// compose URL; the share counts as done once any channel was invoked.
pub async fn share_check_in<H: HostRuntime>(
    host: &H,
    config: &WallConfig,
    gratitude: &str,
    tx_hash: &str,
) -> ShareChannel {
    let env = classify(host.snapshot().as_ref());
    let text = compose_post_text(gratitude);
    let embed = transaction_url(config, tx_hash);

    match try_share(host, &env, &text, &embed).await {
        Ok(Some(channel)) => channel,
        Ok(None) => open_compose_fallback(host, config, &text, &embed),
        Err(e) => {
            tracing::warn!("share failed, falling back to compose URL: {e}");
            open_compose_fallback(host, config, &text, &embed)
        }
    }
}

/// Walk the host channels in order. `Ok(None)` means no channel was
/// offered; `Err` means a channel was offered but rejected the call.
async fn try_share<H: HostRuntime>(
    host: &H,
    env: &EnvironmentInfo,
    text: &str,
    embed: &str,
) -> Result<Option<ShareChannel>, WallError> {
    if env.is_farcaster {
        if let Dispatch::Sent = host.compose_cast(text, embed).await? {
            return Ok(Some(ShareChannel::ComposeCast));
        }
    }

    if env.is_base_app {
        if let Dispatch::Sent = host.app_share(text, embed).await? {
            return Ok(Some(ShareChannel::AppShare));
        }
    }

    if let Dispatch::Sent = host.platform_share(SHARE_TITLE, text, embed).await? {
        return Ok(Some(ShareChannel::PlatformShare));
    }

    Ok(None)
}

fn open_compose_fallback<H: HostRuntime>(
    host: &H,
    config: &WallConfig,
    text: &str,
    embed: &str,
) -> ShareChannel {
    let url = compose_url(config, text, embed);
    if let Err(e) = host.open_url(&url) {
        tracing::warn!("failed to open compose URL: {e}");
    }
    ShareChannel::ComposeUrl
}
