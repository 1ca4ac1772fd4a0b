use wasm_bindgen::JsValue;
use web_sys::window;

pub const HOME_PATH: &str = "/";
pub const CART_PATH: &str = "/cart";
pub const LOGIN_PATH: &str = "/login";

/// Ruta actual del navegador ("/" si no hay window)
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| HOME_PATH.to_string())
}

/// Cambia la URL sin recargar la página
pub fn push_path(path: &str) -> Result<(), JsValue> {
    let history = window()
        .ok_or_else(|| JsValue::from_str("window no disponible"))?
        .history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Como push_path pero sin entrada nueva en el historial (redirecciones)
pub fn replace_path(path: &str) -> Result<(), JsValue> {
    let history = window()
        .ok_or_else(|| JsValue::from_str("window no disponible"))?
        .history()?;
    history.replace_state_with_url(&JsValue::NULL, "", Some(path))
}
