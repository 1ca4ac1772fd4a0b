// ============================================================================
// CART PAGE - Listas guardadas en el carrito
// ============================================================================

use yew::prelude::*;

use super::confirm_button::ConfirmButton;
use crate::hooks::{use_cart_context, use_mounted, use_toast, CartHandle, ToastHandle};
use crate::models::CartEntry;

#[derive(Properties, PartialEq)]
struct CartEntryCardProps {
    entry: CartEntry,
    cart: CartHandle,
}

#[function_component(CartEntryCard)]
fn cart_entry_card(props: &CartEntryCardProps) -> Html {
    let toast = use_toast();
    let mounted = use_mounted();
    let removing = use_state(|| false);

    let on_remove = {
        let cart = props.cart.clone();
        let id = props.entry.id.clone();
        let removing = removing.clone();
        Callback::from(move |_: ()| {
            if *removing {
                return;
            }
            removing.set(true);
            let cart = cart.clone();
            let id = id.clone();
            let toast = toast.clone();
            let removing = removing.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = cart.remove_from_cart(id).await;
                notify(&toast, result.map(|_| "Liste retirée du panier"));
                // Con éxito la tarjeta desaparece de la lista
                if mounted.is_mounted() {
                    removing.set(false);
                }
            });
        })
    };

    let entry = &props.entry;

    html! {
        <article class="cart-entry">
            <header class="cart-entry-header">
                <div>
                    <h3>{ &entry.school.name }</h3>
                    <span class="cart-entry-grade">{ &entry.grade.name }</span>
                </div>
                <time class="cart-entry-date">{ entry.formatted_date() }</time>
            </header>
            <ul class="cart-entry-items">
                { for entry.items.iter().map(|item| html! {
                    <li key={item.id.to_string()}>
                        <span class="item-name">{ &item.name }</span>
                        <span class="item-quantity">{ format!("× {}", item.quantity) }</span>
                    </li>
                }) }
            </ul>
            <footer class="cart-entry-footer">
                <span>{ format!("{} article(s)", entry.total_quantity()) }</span>
                <ConfirmButton
                    label={if *removing { "Suppression..." } else { "Supprimer" }}
                    confirm_label="Confirmer ?"
                    class={classes!("btn-remove")}
                    disabled={*removing}
                    on_confirm={on_remove}
                />
            </footer>
        </article>
    }
}

fn notify(toast: &Option<ToastHandle>, result: Result<&str, crate::error::ApiError>) {
    let Some(toast) = toast else { return };
    match result {
        Ok(message) => toast.success(message),
        Err(e) => toast.error(e.to_string()),
    }
}

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let cart = use_cart_context();
    let toast = use_toast();
    let mounted = use_mounted();
    let clearing = use_state(|| false);

    let Some(cart) = cart else {
        log::error!("❌ CartPage fuera de CartProvider");
        return html! {};
    };

    let on_refresh = {
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| {
            let cart = cart.clone();
            // el error queda en el store
            wasm_bindgen_futures::spawn_local(async move {
                let _ = cart.refresh_cart().await;
            });
        })
    };

    let on_clear = {
        let cart = cart.clone();
        let clearing = clearing.clone();
        Callback::from(move |_: ()| {
            if *clearing {
                return;
            }
            clearing.set(true);
            let cart = cart.clone();
            let toast = toast.clone();
            let clearing = clearing.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = cart.clear_cart().await;
                notify(&toast, result.map(|_| "Panier vidé"));
                if mounted.is_mounted() {
                    clearing.set(false);
                }
            });
        })
    };

    let on_dismiss_error = {
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| cart.dismiss_error())
    };

    let state = cart.state();

    let body = if state.loading && state.is_empty() {
        html! { <div class="cart-loading">{"⏳ Chargement du panier..."}</div> }
    } else if state.is_empty() {
        html! { <div class="cart-empty">{"Votre panier est vide"}</div> }
    } else {
        html! {
            <div class="cart-entries">
                { for state.entries.iter().map(|entry| html! {
                    <CartEntryCard key={entry.id.clone()} entry={entry.clone()} cart={cart.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <main class="cart-page">
            <div class="cart-toolbar">
                <h2>{ format!("Panier : {} article(s)", state.total_items()) }</h2>
                <button type="button" class="btn-refresh" disabled={state.loading} onclick={on_refresh}>
                    {"Actualiser"}
                </button>
                <ConfirmButton
                    label={if *clearing { "Vidage..." } else { "Vider le panier" }}
                    confirm_label="Tout supprimer ?"
                    class={classes!("btn-clear")}
                    disabled={*clearing || state.is_empty()}
                    on_confirm={on_clear}
                />
            </div>

            if let Some(message) = state.error.clone() {
                <div class="error-banner" role="alert">
                    <span>{ message }</span>
                    <button type="button" class="btn-close" onclick={on_dismiss_error}>{"✕"}</button>
                </div>
            }

            { body }
        </main>
    }
}
