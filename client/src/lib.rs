//! # client
//!
//! Browser chat widget compiled to WebAssembly.
//!
//! The widget core (`widget`, `state`, `net::sink`) is host-independent and
//! tested natively. The DOM binding (`dom`) and the WebSocket lifecycle
//! (`net::socket`) are gated behind the `hydrate` feature since they
//! require a browser environment.

pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod net;
pub mod state;
pub mod widget;

/// WASM entry point: install console logging and mount onto the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = dom::mount(&config::WidgetConfig::default()) {
        log::error!("chat widget failed to mount: {e}");
    }
}
