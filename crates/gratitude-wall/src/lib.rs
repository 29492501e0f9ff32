//! Gratitude Wall client core for Base mini apps.
//!
//! Records a daily gratitude check-in as a single `checkIn(bytes32)`
//! transaction against the GratitudeWall contract on Base, connecting the
//! wallet according to the hosting environment (Farcaster client, Base app,
//! or plain web) and optionally sharing the result to Farcaster.
//!
//! # Pieces
//!
//! - [`environment`] — classifies the hosting environment from a runtime snapshot
//! - [`embedded`] — reads an already-connected wallet from the host SDK
//! - [`autoconnect`] — the at-most-once auto-connect session ([`WalletSession`])
//! - [`checkin`] — message identifier construction and contract submission
//! - [`share`] — Farcaster share cascade with a compose-URL fallback
//!
//! The session talks to the page through two seams: [`HostRuntime`] (injected
//! host globals) and [`WalletLink`] (the wallet-connection library). The
//! `gratitude-wall-web` crate binds both to a real browser; tests supply
//! scripted doubles.
//!
//! # Quick example
//!
//! ```
//! use gratitude::{checkin, share, WallConfig};
//!
//! let config = WallConfig::default();
//! let id = checkin::message_hash("grateful for rust");
//! assert_eq!(id.len(), 32);
//!
//! let text = share::compose_post_text("grateful for rust");
//! let url = share::compose_url(&config, &text, &share::transaction_url(&config, "0xabc"));
//! assert!(url.starts_with("https://warpcast.com/~/compose?text="));
//! ```

pub mod autoconnect;
pub mod checkin;
pub mod connector;
pub mod constants;
pub mod embedded;
pub mod environment;
pub mod error;
pub mod host;
pub mod share;

use alloy::sol;

// GratitudeWall contract interface. One write entry point; the argument is
// the 32-byte identifier from [`checkin::message_hash`].
sol! {
    #[sol(rpc)]
    interface GratitudeWall {
        function checkIn(bytes32 messageHash) external;
    }
}

// Re-exports
pub use autoconnect::{AutoConnectState, WalletSession};
pub use checkin::{check_in_calldata, message_hash};
pub use connector::{find_primary_connector, WalletLink};
pub use constants::WallConfig;
pub use constants::*;
pub use embedded::{embedded_wallet_info, EmbeddedWalletInfo};
pub use environment::{classify, ConnectionStrategy, EnvironmentInfo, RuntimeSnapshot};
pub use error::WallError;
pub use host::{Dispatch, EmbeddedProvider, HostRuntime};
pub use share::{share_check_in, ShareChannel};
