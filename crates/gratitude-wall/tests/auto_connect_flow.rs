//! End-to-end auto-connect behavior against scripted host and connector
//! doubles.

use std::cell::RefCell;
use std::rc::Rc;

use gratitude::{
    Dispatch, EmbeddedProvider, EnvironmentInfo, HostRuntime, RuntimeSnapshot, WallConfig,
    WallError, WalletLink, WalletSession,
};

// -- Doubles --

#[derive(Clone, Default)]
struct FakeHost {
    snapshot: Option<RuntimeSnapshot>,
    farcaster_address: Option<String>,
    base_address: Option<String>,
    wallet_rejects: bool,
}

impl HostRuntime for FakeHost {
    fn snapshot(&self) -> Option<RuntimeSnapshot> {
        self.snapshot.clone()
    }

    async fn wallet_address(
        &self,
        provider: EmbeddedProvider,
    ) -> Result<Option<String>, WallError> {
        if self.wallet_rejects {
            return Err(WallError::HostError("getAddress rejected".to_string()));
        }
        Ok(match provider {
            EmbeddedProvider::Farcaster => self.farcaster_address.clone(),
            EmbeddedProvider::BaseApp => self.base_address.clone(),
        })
    }

    async fn compose_cast(&self, _text: &str, _embed: &str) -> Result<Dispatch, WallError> {
        Ok(Dispatch::Unavailable)
    }

    async fn app_share(&self, _text: &str, _url: &str) -> Result<Dispatch, WallError> {
        Ok(Dispatch::Unavailable)
    }

    async fn platform_share(
        &self,
        _title: &str,
        _text: &str,
        _url: &str,
    ) -> Result<Dispatch, WallError> {
        Ok(Dispatch::Unavailable)
    }

    fn open_url(&self, _url: &str) -> Result<(), WallError> {
        Ok(())
    }
}

#[derive(Default)]
struct LinkState {
    names: Vec<String>,
    address: Option<String>,
    connect_calls: u32,
    disconnect_calls: u32,
    fail_connect: bool,
}

/// Shared-handle connector double so tests can observe calls after the
/// session takes ownership of its clone.
#[derive(Clone, Default)]
struct FakeLink(Rc<RefCell<LinkState>>);

impl FakeLink {
    fn with_names(names: &[&str]) -> Self {
        let link = Self::default();
        link.0.borrow_mut().names = names.iter().map(|s| s.to_string()).collect();
        link
    }

    fn connect_calls(&self) -> u32 {
        self.0.borrow().connect_calls
    }
}

impl WalletLink for FakeLink {
    fn connector_names(&self) -> Vec<String> {
        self.0.borrow().names.clone()
    }

    async fn connect(&mut self, connector_name: &str) -> Result<String, WallError> {
        let mut state = self.0.borrow_mut();
        state.connect_calls += 1;
        if state.fail_connect {
            return Err(WallError::ConnectError(format!(
                "{connector_name}: user rejected"
            )));
        }
        let address = "0x1111111111111111111111111111111111111111".to_string();
        state.address = Some(address.clone());
        Ok(address)
    }

    async fn disconnect(&mut self) -> Result<(), WallError> {
        let mut state = self.0.borrow_mut();
        state.disconnect_calls += 1;
        state.address = None;
        Ok(())
    }

    fn address(&self) -> Option<String> {
        self.0.borrow().address.clone()
    }
}

// -- Fixtures --

const CONNECTORS: &[&str] = &["MetaMask", "Coinbase Wallet", "WalletConnect"];

fn farcaster_snapshot() -> RuntimeSnapshot {
    RuntimeSnapshot {
        has_farcaster_sdk: true,
        has_ethereum: true,
        ..RuntimeSnapshot::default()
    }
}

fn base_app_snapshot() -> RuntimeSnapshot {
    RuntimeSnapshot {
        has_base_sdk: true,
        has_ethereum: true,
        ..RuntimeSnapshot::default()
    }
}

fn web_snapshot() -> RuntimeSnapshot {
    RuntimeSnapshot {
        user_agent: "Mozilla/5.0".to_string(),
        hostname: "gratitude.example".to_string(),
        ..RuntimeSnapshot::default()
    }
}

fn quick_config() -> WallConfig {
    WallConfig {
        settle_delay_ms: 0,
        ..WallConfig::default()
    }
}

fn session(
    host: FakeHost,
    link: &FakeLink,
    config: WallConfig,
) -> WalletSession<FakeHost, FakeLink> {
    WalletSession::new(host, link.clone(), config)
}

// -- Tests --

#[tokio::test]
async fn embedded_wallet_wins_without_connector_attempt() {
    let host = FakeHost {
        snapshot: Some(farcaster_snapshot()),
        farcaster_address: Some("0xfc".to_string()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert!(session.is_connected());
    assert_eq!(session.address().as_deref(), Some("0xfc"));
    assert_eq!(link.connect_calls(), 0, "embedded path must be exclusive");
    assert!(session.state().auto_connect_attempted);
    assert!(!session.state().is_auto_connecting);
    assert!(!session.should_show_connect_button());
}

#[tokio::test]
async fn farcaster_without_embedded_wallet_uses_primary_connector() {
    let host = FakeHost {
        snapshot: Some(farcaster_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 1);
    assert!(session.is_connected());
    assert_eq!(
        session.address().as_deref(),
        Some("0x1111111111111111111111111111111111111111")
    );
}

#[tokio::test]
async fn base_app_auto_connects_via_connector() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 1);
    assert!(session.is_connected());
    assert!(session.environment().is_base_app);
}

#[tokio::test]
async fn plain_web_never_connects_automatically() {
    let host = FakeHost {
        snapshot: Some(web_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 0);
    assert!(!session.is_connected());
    assert!(session.state().auto_connect_attempted);
    assert!(session.should_show_connect_button());
}

#[tokio::test]
async fn attempt_runs_at_most_once_per_session() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    link.0.borrow_mut().fail_connect = true;
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;
    session.auto_connect().await;
    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 1);
    assert!(session.state().auto_connect_attempted);
}

#[tokio::test]
async fn already_connected_wallet_skips_the_attempt_entirely() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    link.0.borrow_mut().address = Some("0x2222".to_string());
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 0);
    // Skipped, not settled: the attempt never ran.
    assert!(!session.state().auto_connect_attempted);
    assert!(session.is_connected());
}

#[tokio::test]
async fn connect_failure_settles_on_the_manual_path() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    link.0.borrow_mut().fail_connect = true;
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert!(!session.is_connected());
    assert!(session.state().auto_connect_attempted);
    assert!(session.should_show_connect_button());
}

#[tokio::test]
async fn embedded_lookup_rejection_still_tries_the_connector() {
    let host = FakeHost {
        snapshot: Some(farcaster_snapshot()),
        wallet_rejects: true,
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 1);
    assert!(session.is_connected());
}

#[tokio::test]
async fn missing_primary_connector_settles_without_connection() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(&["MetaMask", "WalletConnect"]);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;

    assert_eq!(link.connect_calls(), 0);
    assert!(session.state().auto_connect_attempted);
    assert!(session.should_show_connect_button());
}

#[tokio::test]
async fn disconnect_rearms_auto_connect() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;
    assert!(session.is_connected());
    assert!(session.state().auto_connect_attempted);

    session.disconnect().await.unwrap();
    assert!(!session.is_connected());
    assert!(session.state().embedded_wallet.is_none());
    assert!(!session.state().auto_connect_attempted);

    session.auto_connect().await;
    assert_eq!(link.connect_calls(), 2);
    assert!(session.is_connected());
}

#[tokio::test]
async fn disconnect_clears_embedded_wallet_state() {
    let host = FakeHost {
        snapshot: Some(farcaster_snapshot()),
        farcaster_address: Some("0xfc".to_string()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let mut session = session(host, &link, quick_config());

    session.auto_connect().await;
    assert!(session.state().embedded_wallet.is_some());

    session.disconnect().await.unwrap();
    assert!(session.state().embedded_wallet.is_none());
    assert!(!session.is_connected());
    assert_eq!(link.0.borrow().disconnect_calls, 1);
}

#[tokio::test]
async fn manual_connect_propagates_failure() {
    let host = FakeHost {
        snapshot: Some(web_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    link.0.borrow_mut().fail_connect = true;
    let mut session = session(host, &link, quick_config());

    let err = session.connect().await.unwrap_err();
    assert!(matches!(err, WallError::ConnectError(_)));
}

#[tokio::test]
async fn manual_connect_without_primary_connector_errors() {
    let host = FakeHost {
        snapshot: Some(web_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(&["MetaMask"]);
    let mut session = session(host, &link, quick_config());

    let err = session.connect().await.unwrap_err();
    assert!(err.to_string().contains("coinbase"));
}

#[tokio::test]
async fn teardown_abort_cancels_the_settle_delay() {
    let host = FakeHost {
        snapshot: Some(base_app_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let config = WallConfig {
        settle_delay_ms: 50,
        ..WallConfig::default()
    };
    let mut session = session(host, &link, config);

    {
        let (task, teardown) = session.auto_connect_task();
        teardown.abort();
        assert!(task.await.is_err(), "aborted task must not complete");
    }

    assert_eq!(link.connect_calls(), 0);
    assert!(!session.state().auto_connect_attempted);
    assert!(!session.state().is_auto_connecting);
}

#[tokio::test]
async fn session_snapshot_taken_at_creation() {
    let host = FakeHost {
        snapshot: Some(farcaster_snapshot()),
        ..FakeHost::default()
    };
    let link = FakeLink::with_names(CONNECTORS);
    let session = session(host, &link, quick_config());

    let env: &EnvironmentInfo = session.environment();
    assert!(env.is_farcaster);
    assert!(session.can_auto_connect());
    assert!(!session.state().auto_connect_attempted);
    assert!(!session.should_show_connect_button());
}
