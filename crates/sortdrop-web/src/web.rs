//! WebAssembly entry point.

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    // A host that already installed a logger keeps it
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }

    log::info!("SortDrop {} loaded", env!("CARGO_PKG_VERSION"));
}
