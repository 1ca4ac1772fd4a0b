// ============================================================================
// USE LOCATION HOOK - Ruta actual + navegación con History API
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::utils::{current_path, push_path, replace_path};

#[derive(Clone, PartialEq)]
pub struct UseLocationHandle {
    pub path: String,
    /// Navegación del usuario (nueva entrada de historial)
    pub navigate: Callback<String>,
    /// Redirección del guard (reemplaza la entrada actual)
    pub redirect: Callback<String>,
}

#[hook]
pub fn use_location() -> UseLocationHandle {
    let path = use_state(current_path);

    // Botones atrás/adelante del navegador
    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = window().and_then(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    path.set(current_path());
                }) as Box<dyn FnMut(web_sys::Event)>);

                win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                    .ok()
                    .map(|_| (win, closure))
            });

            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let path = path.clone();
        Callback::from(move |target: String| {
            if *path == target {
                return;
            }
            if let Err(e) = push_path(&target) {
                log::error!("❌ Error navegando a {}: {:?}", target, e);
            }
            path.set(target);
        })
    };

    let redirect = {
        let path = path.clone();
        Callback::from(move |target: String| {
            log::info!("↪️ Redirección a {}", target);
            if let Err(e) = replace_path(&target) {
                log::error!("❌ Error redirigiendo a {}: {:?}", target, e);
            }
            path.set(target);
        })
    };

    UseLocationHandle {
        path: (*path).clone(),
        navigate,
        redirect,
    }
}
