//! Check-in submission through the injected provider.

use gratitude::{checkin, WallConfig, WallError};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;

use crate::runtime::{call_async, get_path, js_err};

/// Submit `checkIn(messageHash)` with `eth_sendTransaction` via
/// `window.ethereum`.
///
/// Returns the pending transaction hash; the page observes confirmation
/// through the provider's receipt events. No retry on failure.
pub async fn submit_check_in(
    config: &WallConfig,
    from: &str,
    message: &str,
) -> Result<String, WallError> {
    checkin::validate_message(message, config)?;

    let Some(window) = web_sys::window() else {
        return Err(WallError::ChainError("no windowing context".to_string()));
    };
    let Some(ethereum) = get_path(window.as_ref(), &["ethereum"]) else {
        return Err(WallError::ChainError(
            "no injected wallet provider".to_string(),
        ));
    };

    let calldata = checkin::check_in_calldata(message);
    let data = format!(
        "0x{}",
        calldata
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<String>()
    );
    let to = format!("{:#x}", config.contract);

    let tx = Object::new();
    for (key, value) in [("from", from), ("to", to.as_str()), ("data", data.as_str())] {
        Reflect::set(&tx, &JsValue::from_str(key), &JsValue::from_str(value))
            .map_err(|e| js_err("transaction build", e))?;
    }

    let request = Object::new();
    Reflect::set(
        &request,
        &JsValue::from_str("method"),
        &JsValue::from_str("eth_sendTransaction"),
    )
    .map_err(|e| js_err("request build", e))?;
    let params = Array::of1(tx.as_ref());
    Reflect::set(&request, &JsValue::from_str("params"), params.as_ref())
        .map_err(|e| js_err("request build", e))?;

    let hash = call_async(&ethereum, "request", &Array::of1(request.as_ref()))
        .await
        .map_err(|e| WallError::ChainError(e.to_string()))?;

    hash.as_string()
        .ok_or_else(|| WallError::ChainError("provider returned no transaction hash".to_string()))
}
