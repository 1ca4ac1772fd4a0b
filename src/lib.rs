// ============================================================================
// FOURNITURES PWA - FRONTEND MVVM (RUST + YEW)
// ============================================================================
// - Components: vistas Yew (sin lógica de negocio)
// - Hooks: conectan stores + viewmodels con los componentes
// - ViewModels: lógica async, testeable sin navegador
// - Stores: estado + reducers
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use wasm_bindgen::prelude::*;

use crate::components::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Fournitures PWA - entorno {} - backend {}", CONFIG.environment, CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
    Ok(())
}
