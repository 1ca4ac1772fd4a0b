use yew::prelude::*;
use crate::hooks::use_cart::{use_cart, CartHandle};

#[derive(Properties, PartialEq)]
pub struct CartProviderProps {
    pub children: Children,
}

/// Montar solo con sesión autenticada: al montar pide el carrito
#[function_component(CartProvider)]
pub fn cart_provider(props: &CartProviderProps) -> Html {
    let cart_handle = use_cart();

    html! {
        <ContextProvider<CartHandle> context={cart_handle}>
            {props.children.clone()}
        </ContextProvider<CartHandle>>
    }
}

#[hook]
pub fn use_cart_context() -> Option<CartHandle> {
    use_context::<CartHandle>()
}
