//! Host-page observation and js-sys call helpers.

use gratitude::{RuntimeSnapshot, WallError};
use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Observe the hosting page in one pass. `None` outside a browsing context.
pub fn snapshot() -> Option<RuntimeSnapshot> {
    let window = web_sys::window()?;
    let window_js: &JsValue = window.as_ref();

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let hostname = window
        .location()
        .hostname()
        .unwrap_or_default();

    let is_framed = window
        .parent()
        .ok()
        .flatten()
        .map(|parent| {
            let parent_js: &JsValue = parent.as_ref();
            parent_js != window_js
        })
        .unwrap_or(false);

    Some(RuntimeSnapshot {
        user_agent,
        hostname,
        is_framed,
        has_farcaster_sdk: global_present(window_js, "sdk"),
        has_base_sdk: global_present(window_js, "base"),
        has_ethereum: global_present(window_js, "ethereum"),
    })
}

fn global_present(window: &JsValue, name: &str) -> bool {
    Reflect::get(window, &JsValue::from_str(name))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

pub(crate) fn js_err(context: &str, value: JsValue) -> WallError {
    WallError::HostError(format!("{context}: {value:?}"))
}

/// Walk `path` from `root`, stopping at the first missing segment.
pub(crate) fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = root.clone();
    for key in path {
        let next = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if next.is_undefined() || next.is_null() {
            return None;
        }
        current = next;
    }
    Some(current)
}

/// Call `target.name()` synchronously.
pub(crate) fn call_sync(target: &JsValue, name: &str) -> Option<JsValue> {
    let method = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    let func = method.dyn_into::<js_sys::Function>().ok()?;
    func.call0(target).ok()
}

/// Call `target.name(...args)` and await the result.
///
/// Non-promise return values resolve immediately; a missing or non-callable
/// member is an error, since callers check availability first.
pub(crate) async fn call_async(
    target: &JsValue,
    name: &str,
    args: &Array,
) -> Result<JsValue, WallError> {
    let method =
        Reflect::get(target, &JsValue::from_str(name)).map_err(|e| js_err("host call", e))?;
    let func = method
        .dyn_into::<js_sys::Function>()
        .map_err(|_| WallError::HostError(format!("host object has no {name}()")))?;
    let ret = Reflect::apply(&func, target, args).map_err(|e| js_err(name, e))?;
    JsFuture::from(Promise::resolve(&ret))
        .await
        .map_err(|e| js_err(name, e))
}
