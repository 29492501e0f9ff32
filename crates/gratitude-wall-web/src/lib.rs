//! Browser bindings for Gratitude Wall.
//!
//! Binds the core crate's host-capability seams to the real page globals:
//! the Farcaster mini app SDK (`window.sdk`), the Base app SDK
//! (`window.base`), and the injected wallet provider (`window.ethereum`).
//! Rendering and provider wiring stay on the page side; this crate only
//! observes, connects, submits, and shares.
//!
//! Typical wiring from the page's own wasm glue:
//!
//! ```no_run
//! use gratitude::{WallConfig, WalletSession};
//! use gratitude_web::{BrowserHost, JsWalletLink};
//!
//! # async fn mount(link_object: wasm_bindgen::JsValue) {
//! let link = JsWalletLink::new(link_object);
//! let mut session = WalletSession::new(BrowserHost, link, WallConfig::default());
//! let (task, teardown) = session.auto_connect_task();
//! // hold `teardown`, abort it on unmount
//! let _ = task.await;
//! # }
//! ```

mod runtime;
mod submit;
mod wallet;

pub use runtime::snapshot;
pub use submit::submit_check_in;
pub use wallet::{BrowserHost, JsWalletLink};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
