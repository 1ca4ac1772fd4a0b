use yew::prelude::*;

use super::{CartPage, Header, LoginScreen, RouteGuard, ShopPage, ToastProvider};
use crate::hooks::{use_location, CartProvider, SessionContextProvider};
use crate::utils::{CART_PATH, LOGIN_PATH};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <ToastProvider>
                <AppRoutes />
            </ToastProvider>
        </SessionContextProvider>
    }
}

#[function_component(AppRoutes)]
fn app_routes() -> Html {
    let location = use_location();
    let path = location.path.trim_end_matches('/').to_string();

    let content = if path == LOGIN_PATH {
        html! { <LoginScreen /> }
    } else {
        // El carrito solo existe con sesión: CartProvider pide GET /cart al montar
        html! {
            <CartProvider>
                <Header path={location.path.clone()} on_navigate={location.navigate.clone()} />
                if path == CART_PATH {
                    <CartPage />
                } else {
                    <ShopPage />
                }
            </CartProvider>
        }
    };

    html! {
        <div class="app">
            <RouteGuard path={location.path.clone()} on_redirect={location.redirect.clone()}>
                { content }
            </RouteGuard>
        </div>
    }
}
