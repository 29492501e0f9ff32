//! Wallet-connection library seam.
//!
//! The session never talks to a connector implementation directly; it
//! depends only on connector names for selection and on connect/disconnect
//! resolving or rejecting.

use crate::error::WallError;

/// The slice of the wallet-connection library the session consumes.
#[allow(async_fn_in_trait)]
pub trait WalletLink {
    /// Names of the available connectors, in library order.
    fn connector_names(&self) -> Vec<String>;

    /// Negotiate a connection through the named connector. Resolves to the
    /// connected address.
    async fn connect(&mut self, connector_name: &str) -> Result<String, WallError>;

    /// Tear down the active connection.
    async fn disconnect(&mut self) -> Result<(), WallError>;

    /// Address of the connected account, if any.
    fn address(&self) -> Option<String>;

    /// Whether a connector-based connection is active.
    fn is_connected(&self) -> bool {
        self.address().is_some()
    }
}

/// Find the connector whose name identifies the primary wallet provider.
///
/// Case-insensitive substring match; the first hit wins.
pub fn find_primary_connector<'a>(names: &'a [String], keyword: &str) -> Option<&'a str> {
    let keyword = keyword.to_lowercase();
    names
        .iter()
        .find(|name| name.to_lowercase().contains(&keyword))
        .map(String::as_str)
}
