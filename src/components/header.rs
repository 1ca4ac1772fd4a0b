use yew::prelude::*;

use crate::hooks::{use_cart_context, use_mounted, use_session_context};
use crate::utils::{CART_PATH, HOME_PATH};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub path: String,
    pub on_navigate: Callback<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_session_context();
    let cart = use_cart_context();
    let mounted = use_mounted();
    let logging_out = use_state(|| false);

    let on_logout = {
        let session = session.clone();
        let logging_out = logging_out.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(session) = session.clone() else { return };
            logging_out.set(true);
            let logging_out = logging_out.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                session.logout().await;
                if mounted.is_mounted() {
                    logging_out.set(false);
                }
            });
        })
    };

    let nav_to = |target: &'static str| {
        let cb = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(target.to_string()))
    };

    let cart_count = cart.as_ref().map(|c| c.state().entries.len()).unwrap_or(0);
    let username = session.as_ref().and_then(|s| s.username());

    html! {
        <header class="app-header">
            <div class="app-title">{"🎒 Fournitures scolaires"}</div>
            <nav class="app-nav">
                <button
                    type="button"
                    class={classes!("nav-link", (props.path != CART_PATH).then_some("active"))}
                    onclick={nav_to(HOME_PATH)}
                >
                    {"Listes"}
                </button>
                <button
                    type="button"
                    class={classes!("nav-link", (props.path == CART_PATH).then_some("active"))}
                    onclick={nav_to(CART_PATH)}
                >
                    { format!("Panier ({})", cart_count) }
                </button>
            </nav>
            <div class="app-user">
                if let Some(name) = username {
                    <span class="username">{ name }</span>
                }
                <button type="button" class="btn-logout" disabled={*logging_out} onclick={on_logout}>
                    { if *logging_out { "Déconnexion..." } else { "Se déconnecter" } }
                </button>
            </div>
        </header>
    }
}
