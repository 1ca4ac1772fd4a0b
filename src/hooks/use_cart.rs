// ============================================================================
// USE CART HOOK - Carrito del usuario autenticado
// ============================================================================
// Solo se monta dentro de la parte autenticada (CartProvider): montar este
// hook dispara GET /cart.
// ============================================================================

use yew::prelude::*;

use crate::error::ApiResult;
use crate::hooks::use_mounted;
use crate::models::CartEntryPayload;
use crate::services::ApiClient;
use crate::stores::{CartAction, CartStore};
use crate::utils::MountGuard;
use crate::viewmodels::CartViewModel;

#[derive(Clone)]
pub struct CartHandle {
    store: UseReducerHandle<CartStore>,
    viewmodel: CartViewModel,
    mounted: MountGuard,
}

impl PartialEq for CartHandle {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl CartHandle {
    /// Solo lectura
    pub fn state(&self) -> &CartStore {
        &self.store
    }

    fn dispatcher(&self) -> impl Fn(CartAction) {
        let store = self.store.clone();
        self.mounted.guard(move |action: CartAction| store.dispatch(action))
    }

    pub async fn add_to_cart(&self, payload: CartEntryPayload) -> ApiResult<()> {
        let dispatch = self.dispatcher();
        self.viewmodel.add_to_cart(&payload, &dispatch).await
    }

    pub async fn remove_from_cart(&self, id: String) -> ApiResult<()> {
        let dispatch = self.dispatcher();
        self.viewmodel.remove_from_cart(&id, &dispatch).await
    }

    pub async fn clear_cart(&self) -> ApiResult<()> {
        let dispatch = self.dispatcher();
        self.viewmodel.clear_cart(&dispatch).await
    }

    /// Recarga completa; si hay una mutación en vuelo gana la última respuesta
    pub async fn refresh_cart(&self) -> ApiResult<()> {
        let dispatch = self.dispatcher();
        self.viewmodel.load(&dispatch).await
    }

    pub fn dismiss_error(&self) {
        self.store.dispatch(CartAction::DismissError);
    }
}

#[hook]
pub fn use_cart() -> CartHandle {
    let store = use_reducer(CartStore::default);
    let mounted = use_mounted();
    let viewmodel = CartViewModel::new(ApiClient::new());

    let handle = CartHandle {
        store,
        viewmodel,
        mounted,
    };

    // Fetch inicial al montar
    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // el error queda en el store
                let _ = handle.refresh_cart().await;
            });
            || ()
        });
    }

    handle
}
