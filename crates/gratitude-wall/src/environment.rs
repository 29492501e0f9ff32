//! Hosting-environment detection.
//!
//! A mini app can be loaded inside the Farcaster client, inside the Base
//! app, or in a plain browser tab. The classification drives wallet
//! connection: embedded hosts carry their own wallet, the open web does not.

use serde::{Deserialize, Serialize};

/// Raw observations taken from the hosting page in one pass.
///
/// Callers pass `None` where no windowing context exists (server-side
/// rendering, tests without a DOM).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSnapshot {
    pub user_agent: String,
    pub hostname: String,
    /// The page is embedded inside another frame.
    pub is_framed: bool,
    /// `window.sdk` — the Farcaster mini app SDK global.
    pub has_farcaster_sdk: bool,
    /// `window.base` — the Base app SDK global.
    pub has_base_sdk: bool,
    /// `window.ethereum` — a generic injected wallet provider.
    pub has_ethereum: bool,
}

/// Where the app is running.
///
/// Exactly one of `is_farcaster`, `is_base_app`, `is_web` is true for any
/// snapshot; all three are false only when no windowing context exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub is_farcaster: bool,
    pub is_base_app: bool,
    pub is_web: bool,
    /// Lowercased user agent of the hosting page.
    pub user_agent: String,
    /// An injected wallet provider is present, independent of the
    /// classification above.
    pub has_wallet: bool,
}

/// Preferred wallet-connection flow for an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStrategy {
    /// The host already carries a connected wallet (Farcaster).
    Embedded,
    /// Connect automatically through the primary connector (Base app).
    Auto,
    /// The user connects by hand (plain web).
    Manual,
}

impl EnvironmentInfo {
    /// True when the host may carry an embedded wallet worth probing.
    pub fn can_auto_connect(&self) -> bool {
        self.is_farcaster || self.is_base_app
    }

    pub fn connection_strategy(&self) -> ConnectionStrategy {
        if self.is_farcaster {
            ConnectionStrategy::Embedded
        } else if self.is_base_app {
            ConnectionStrategy::Auto
        } else {
            ConnectionStrategy::Manual
        }
    }
}

/// Classify the hosting environment from a runtime snapshot.
///
/// Pure per snapshot and deliberately not memoized: host SDKs inject their
/// globals after page load, so re-running against a fresh snapshot may give
/// a different answer.
pub fn classify(snapshot: Option<&RuntimeSnapshot>) -> EnvironmentInfo {
    let Some(snap) = snapshot else {
        return EnvironmentInfo::default();
    };

    let user_agent = snap.user_agent.to_lowercase();
    let hostname = snap.hostname.to_lowercase();

    // A frame embed alone proves nothing (same-origin test embeds exist);
    // it only counts together with an injected provider.
    let framed_webview = snap.is_framed && snap.has_ethereum;

    let is_farcaster = snap.has_farcaster_sdk
        || user_agent.contains("farcaster")
        || user_agent.contains("warpcast")
        || hostname.contains("warpcast.com")
        || framed_webview;

    let is_base_app = !is_farcaster
        && (snap.has_base_sdk
            || user_agent.contains("base")
            || user_agent.contains("coinbase")
            || hostname.contains("base.org")
            || hostname.contains("coinbase.com"));

    EnvironmentInfo {
        is_farcaster,
        is_base_app,
        is_web: !is_farcaster && !is_base_app,
        user_agent,
        has_wallet: snap.has_ethereum,
    }
}
