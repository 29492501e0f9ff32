//! Capability seams over the hosting page.
//!
//! Injected host objects are duck-typed; rather than scattering existence
//! checks through every call site, the session talks to one [`HostRuntime`]
//! implementation (the browser adapter in production, scripted doubles in
//! tests). Absence of a capability and rejection by the host are distinct:
//! absence falls through to the next channel, rejection short-circuits to
//! the share fallback.

use serde::{Deserialize, Serialize};

use crate::environment::RuntimeSnapshot;
use crate::error::WallError;

/// Which host answered an embedded-wallet query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmbeddedProvider {
    /// `window.sdk.wallet` in the Farcaster client.
    Farcaster,
    /// `window.base.wallet` in the Base app.
    BaseApp,
}

/// Outcome of offering work to one host channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The host accepted the call.
    Sent,
    /// The host does not offer this channel.
    Unavailable,
}

/// Host-page services the session depends on.
///
/// All async operations may reject; `Err` means the host offered the
/// capability but the call failed. The session never treats either case as
/// fatal.
#[allow(async_fn_in_trait)]
pub trait HostRuntime {
    /// Observe the hosting page. `None` when no windowing context exists.
    fn snapshot(&self) -> Option<RuntimeSnapshot>;

    /// Ask the given host wallet for its connected address.
    ///
    /// `Ok(None)` means the host exposes no such wallet object.
    async fn wallet_address(
        &self,
        provider: EmbeddedProvider,
    ) -> Result<Option<String>, WallError>;

    /// Farcaster `composeCast(text, embeds)` action.
    async fn compose_cast(&self, text: &str, embed: &str) -> Result<Dispatch, WallError>;

    /// Base app `share(text, url)` action.
    async fn app_share(&self, text: &str, url: &str) -> Result<Dispatch, WallError>;

    /// Generic platform share capability (`navigator.share`).
    async fn platform_share(
        &self,
        title: &str,
        text: &str,
        url: &str,
    ) -> Result<Dispatch, WallError>;

    /// Open `url` in a new browsing context.
    fn open_url(&self, url: &str) -> Result<(), WallError>;
}
