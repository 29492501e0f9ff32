//! Environment-aware wallet auto-connection.
//!
//! One [`WalletSession`] lives for one component mount. On mount the page
//! drives the automatic attempt, usually through
//! [`WalletSession::auto_connect_task`], whose abort handle is invoked on
//! teardown so a pending settle delay never acts on unmounted state. The
//! attempt runs at most once per session and settles regardless of outcome;
//! only an explicit disconnect re-arms it.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use crate::connector::{find_primary_connector, WalletLink};
use crate::constants::WallConfig;
use crate::embedded::{embedded_wallet_info, EmbeddedWalletInfo};
use crate::environment::{classify, EnvironmentInfo};
use crate::error::WallError;
use crate::host::HostRuntime;

/// Session-scoped auto-connect record.
#[derive(Debug, Clone, Default)]
pub struct AutoConnectState {
    /// An automatic attempt is in flight.
    pub is_auto_connecting: bool,
    /// Monotonic within a session: set once when the attempt settles,
    /// cleared only by an explicit disconnect.
    pub auto_connect_attempted: bool,
    /// Environment snapshot taken at session creation, refreshed per
    /// attempt.
    pub environment: EnvironmentInfo,
    /// Embedded wallet read during the last attempt, if any.
    pub embedded_wallet: Option<EmbeddedWalletInfo>,
}

/// Wallet session for one component mount: wraps the wallet-connection
/// library and the host runtime behind a single connection-state view.
pub struct WalletSession<H, L> {
    host: H,
    link: L,
    config: WallConfig,
    state: AutoConnectState,
}

impl<H: HostRuntime, L: WalletLink> WalletSession<H, L> {
    /// Create a session with a synchronous environment snapshot.
    pub fn new(host: H, link: L, config: WallConfig) -> Self {
        let environment = classify(host.snapshot().as_ref());
        Self {
            host,
            link,
            config,
            state: AutoConnectState {
                environment,
                ..AutoConnectState::default()
            },
        }
    }

    pub fn state(&self) -> &AutoConnectState {
        &self.state
    }

    pub fn environment(&self) -> &EnvironmentInfo {
        &self.state.environment
    }

    /// Whether the current environment allows an automatic attempt,
    /// re-detected rather than read from the stored snapshot.
    pub fn can_auto_connect(&self) -> bool {
        classify(self.host.snapshot().as_ref()).can_auto_connect()
    }

    fn embedded_connected(&self) -> bool {
        self.state
            .embedded_wallet
            .as_ref()
            .is_some_and(|wallet| wallet.is_connected)
    }

    /// Connected through either path: a library connector or the host's
    /// embedded wallet.
    pub fn is_connected(&self) -> bool {
        self.link.is_connected() || self.embedded_connected()
    }

    /// Connected address, preferring the library connector over the
    /// embedded wallet.
    pub fn address(&self) -> Option<String> {
        self.link.address().or_else(|| {
            self.state
                .embedded_wallet
                .as_ref()
                .and_then(|wallet| wallet.address.clone())
        })
    }

    /// Derived, never stored: the UI offers a manual connect button only
    /// after the automatic attempt has settled without a connection.
    pub fn should_show_connect_button(&self) -> bool {
        !self.state.is_auto_connecting
            && !self.link.is_connected()
            && !self.embedded_connected()
            && self.state.auto_connect_attempted
    }

    /// Run the automatic connection attempt.
    ///
    /// Skips entirely when an attempt already settled or a wallet is
    /// already connected. Otherwise waits the settle delay, re-classifies
    /// the environment, and tries the embedded wallet first; if that yields
    /// nothing and the host is an embedded client, falls back to the
    /// primary connector. Plain web never connects automatically. Failures
    /// are logged and leave the session settled on the manual path.
    pub async fn auto_connect(&mut self) {
        if self.state.auto_connect_attempted || self.link.is_connected() {
            return;
        }

        // Host SDKs inject their globals after page load; sample only after
        // the settle delay.
        sleep(Duration::from_millis(self.config.settle_delay_ms)).await;

        let env = classify(self.host.snapshot().as_ref());
        self.state.environment = env.clone();
        self.state.is_auto_connecting = true;

        if let Err(e) = self.try_auto_connect(&env).await {
            tracing::warn!("auto-connect failed: {e}");
        }

        self.state.is_auto_connecting = false;
        self.state.auto_connect_attempted = true;
    }

    async fn try_auto_connect(&mut self, env: &EnvironmentInfo) -> Result<(), WallError> {
        if !env.can_auto_connect() {
            return Ok(());
        }

        let embedded = embedded_wallet_info(&self.host).await;
        let connected = embedded.is_connected;
        let address = embedded.address.clone();
        self.state.embedded_wallet = Some(embedded);

        if connected {
            // Single path: an embedded wallet suppresses the connector attempt.
            tracing::info!("using embedded wallet: {:?}", address);
            return Ok(());
        }

        let names = self.link.connector_names();
        if let Some(name) = find_primary_connector(&names, &self.config.primary_connector) {
            let name = name.to_string();
            let address = self.link.connect(&name).await?;
            tracing::info!("auto-connected via {name}: {address}");
        }
        Ok(())
    }

    /// The auto-connect future paired with an abort handle for teardown.
    ///
    /// Aborting before the settle delay elapses leaves the session
    /// untouched.
    pub fn auto_connect_task(
        &mut self,
    ) -> (Abortable<impl Future<Output = ()> + '_>, AbortHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        (Abortable::new(self.auto_connect(), registration), handle)
    }

    /// Manually connect through the primary connector.
    ///
    /// Unlike the automatic path, failures propagate so the UI can surface
    /// them.
    pub async fn connect(&mut self) -> Result<String, WallError> {
        let names = self.link.connector_names();
        let name = find_primary_connector(&names, &self.config.primary_connector)
            .ok_or_else(|| {
                WallError::ConnectError(format!(
                    "no {} connector available",
                    self.config.primary_connector
                ))
            })?
            .to_string();
        self.link.connect(&name).await
    }

    /// Disconnect and re-arm auto-connect for a later mount.
    pub async fn disconnect(&mut self) -> Result<(), WallError> {
        self.link.disconnect().await?;
        self.state.embedded_wallet = None;
        self.state.auto_connect_attempted = false;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}
