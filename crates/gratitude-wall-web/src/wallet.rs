//! Browser implementations of the core wallet seams.

use gratitude::{Dispatch, EmbeddedProvider, HostRuntime, RuntimeSnapshot, WallError, WalletLink};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;

use crate::runtime::{call_async, call_sync, get_path, js_err};

/// Host runtime backed by the live page globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl BrowserHost {
    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }
}

fn object_with(pairs: &[(&str, &str)]) -> Result<Object, WallError> {
    let object = Object::new();
    for (key, value) in pairs {
        Reflect::set(
            &object,
            &JsValue::from_str(key),
            &JsValue::from_str(value),
        )
        .map_err(|e| js_err("object build", e))?;
    }
    Ok(object)
}

impl HostRuntime for BrowserHost {
    fn snapshot(&self) -> Option<RuntimeSnapshot> {
        crate::runtime::snapshot()
    }

    async fn wallet_address(
        &self,
        provider: EmbeddedProvider,
    ) -> Result<Option<String>, WallError> {
        let Some(window) = Self::window() else {
            return Ok(None);
        };
        let root = match provider {
            EmbeddedProvider::Farcaster => "sdk",
            EmbeddedProvider::BaseApp => "base",
        };
        let Some(wallet) = get_path(window.as_ref(), &[root, "wallet"]) else {
            return Ok(None);
        };
        let address = call_async(&wallet, "getAddress", &Array::new()).await?;
        Ok(address.as_string())
    }

    async fn compose_cast(&self, text: &str, embed: &str) -> Result<Dispatch, WallError> {
        let Some(window) = Self::window() else {
            return Ok(Dispatch::Unavailable);
        };
        let Some(actions) = get_path(window.as_ref(), &["sdk", "actions"]) else {
            return Ok(Dispatch::Unavailable);
        };
        if get_path(&actions, &["composeCast"]).is_none() {
            return Ok(Dispatch::Unavailable);
        }

        let args = object_with(&[("text", text)])?;
        let embeds = Array::of1(&JsValue::from_str(embed));
        Reflect::set(&args, &JsValue::from_str("embeds"), &embeds)
            .map_err(|e| js_err("composeCast", e))?;

        call_async(&actions, "composeCast", &Array::of1(args.as_ref())).await?;
        Ok(Dispatch::Sent)
    }

    async fn app_share(&self, text: &str, url: &str) -> Result<Dispatch, WallError> {
        let Some(window) = Self::window() else {
            return Ok(Dispatch::Unavailable);
        };
        let Some(base) = get_path(window.as_ref(), &["base"]) else {
            return Ok(Dispatch::Unavailable);
        };
        if get_path(&base, &["share"]).is_none() {
            return Ok(Dispatch::Unavailable);
        }

        let args = object_with(&[("text", text), ("url", url)])?;
        call_async(&base, "share", &Array::of1(args.as_ref())).await?;
        Ok(Dispatch::Sent)
    }

    async fn platform_share(
        &self,
        title: &str,
        text: &str,
        url: &str,
    ) -> Result<Dispatch, WallError> {
        let Some(window) = Self::window() else {
            return Ok(Dispatch::Unavailable);
        };
        let navigator = window.navigator();
        let navigator_js: &JsValue = navigator.as_ref();
        if get_path(navigator_js, &["share"]).is_none() {
            return Ok(Dispatch::Unavailable);
        }

        let args = object_with(&[("title", title), ("text", text), ("url", url)])?;
        call_async(navigator_js, "share", &Array::of1(args.as_ref())).await?;
        Ok(Dispatch::Sent)
    }

    fn open_url(&self, url: &str) -> Result<(), WallError> {
        let window = Self::window()
            .ok_or_else(|| WallError::HostError("no windowing context".to_string()))?;
        window
            .open_with_url_and_target(url, "_blank")
            .map_err(|e| js_err("window.open", e))?;
        Ok(())
    }
}

/// Wallet-connection seam backed by a page-supplied object.
///
/// The object is a thin projection of the page's wallet-connection library,
/// expected to expose `connectorNames(): string[]`,
/// `connect(name): Promise<string>`, `disconnect(): Promise<void>`, and
/// `address(): string | undefined`.
pub struct JsWalletLink {
    inner: JsValue,
}

impl JsWalletLink {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }
}

impl WalletLink for JsWalletLink {
    fn connector_names(&self) -> Vec<String> {
        let Some(names) = call_sync(&self.inner, "connectorNames") else {
            return Vec::new();
        };
        Array::from(&names)
            .iter()
            .filter_map(|value| value.as_string())
            .collect()
    }

    async fn connect(&mut self, connector_name: &str) -> Result<String, WallError> {
        let args = Array::of1(&JsValue::from_str(connector_name));
        let address = call_async(&self.inner, "connect", &args)
            .await
            .map_err(|e| WallError::ConnectError(e.to_string()))?;
        address
            .as_string()
            .ok_or_else(|| WallError::ConnectError("connector returned no address".to_string()))
    }

    async fn disconnect(&mut self) -> Result<(), WallError> {
        call_async(&self.inner, "disconnect", &Array::new())
            .await
            .map_err(|e| WallError::ConnectError(e.to_string()))?;
        Ok(())
    }

    fn address(&self) -> Option<String> {
        call_sync(&self.inner, "address").and_then(|value| value.as_string())
    }
}
