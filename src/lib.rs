#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod logging;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logging::init_browser_logging();

    tracing::debug!("hydrating body");
    leptos::mount::hydrate_body(app::App);
}
