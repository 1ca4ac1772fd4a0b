// ============================================================================
// CART VIEWMODEL - LÓGICA DEL CARRITO
// ============================================================================
// Cada mutación espera la confirmación del servidor antes de despachar.
// Las mutaciones no se encolan entre sí: si dos se solapan, sus efectos se
// aplican en el orden en que llegan las respuestas. Lo mismo con refresh:
// el último fetch en resolver reemplaza la lista.
// ============================================================================

use crate::error::ApiResult;
use crate::models::CartEntryPayload;
use crate::services::{ApiClient, CartApi};
use crate::stores::CartAction;

#[derive(Clone, PartialEq)]
pub struct CartViewModel<A = ApiClient> {
    api: A,
}

impl<A: CartApi> CartViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Carga (o recarga) la lista completa
    pub async fn load(&self, dispatch: &dyn Fn(CartAction)) -> ApiResult<()> {
        dispatch(CartAction::FetchStarted);
        match self.api.get_cart().await {
            Ok(entries) => {
                log::info!("✅ Carrito cargado: {} entradas", entries.len());
                dispatch(CartAction::Fetched(entries));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error cargando carrito: {}", e);
                dispatch(CartAction::FetchFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn add_to_cart(
        &self,
        payload: &CartEntryPayload,
        dispatch: &dyn Fn(CartAction),
    ) -> ApiResult<()> {
        match self.api.add_to_cart(payload).await {
            Ok(entry) => {
                log::info!("✅ Entrada creada: {}", entry.id);
                dispatch(CartAction::Added(entry));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error añadiendo al carrito: {}", e);
                dispatch(CartAction::MutationFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn remove_from_cart(&self, id: &str, dispatch: &dyn Fn(CartAction)) -> ApiResult<()> {
        match self.api.remove_from_cart(id).await {
            Ok(_) => {
                dispatch(CartAction::Removed(id.to_string()));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error eliminando {}: {}", id, e);
                dispatch(CartAction::MutationFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn clear_cart(&self, dispatch: &dyn Fn(CartAction)) -> ApiResult<()> {
        match self.api.clear_cart().await {
            Ok(_) => {
                log::info!("✅ Carrito vaciado");
                dispatch(CartAction::Cleared);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error vaciando carrito: {}", e);
                dispatch(CartAction::MutationFailed(e.to_string()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{CartEntry, CartItem, NamedRef};
    use crate::stores::cart_store::tests::entry;
    use crate::stores::CartStore;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Reducible;

    #[derive(Default)]
    struct FakeCart {
        entries: Vec<CartEntry>,
        fail_with: Option<ApiError>,
        created: Option<CartEntry>,
        received: RefCell<Vec<CartEntryPayload>>,
    }

    impl FakeCart {
        fn result<T>(&self, ok: T) -> ApiResult<T> {
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(ok),
            }
        }
    }

    impl CartApi for FakeCart {
        async fn get_cart(&self) -> ApiResult<Vec<CartEntry>> {
            self.result(self.entries.clone())
        }

        async fn add_to_cart(&self, payload: &CartEntryPayload) -> ApiResult<CartEntry> {
            self.received.borrow_mut().push(payload.clone());
            let created = self.created.clone().unwrap_or_else(|| entry("nouveau", 1));
            self.result(created)
        }

        async fn remove_from_cart(&self, _id: &str) -> ApiResult<Option<serde_json::Value>> {
            self.result(None)
        }

        async fn clear_cart(&self) -> ApiResult<Option<serde_json::Value>> {
            self.result(Some(serde_json::json!({"ok": true})))
        }
    }

    struct Recorder(RefCell<Rc<CartStore>>);

    impl Recorder {
        fn with_entries(entries: Vec<CartEntry>) -> Self {
            Self(RefCell::new(Rc::new(CartStore { entries, ..Default::default() })))
        }

        fn dispatch(&self, action: CartAction) {
            let current = self.0.borrow().clone();
            *self.0.borrow_mut() = current.reduce(action);
        }

        fn store(&self) -> Rc<CartStore> {
            self.0.borrow().clone()
        }
    }

    fn payload() -> CartEntryPayload {
        CartEntryPayload {
            school: NamedRef { id: 1, name: "École du Centre".into() },
            grade: NamedRef { id: 2, name: "CP".into() },
            items: vec![CartItem { id: 10, name: "Ardoise".into(), quantity: 1 }],
        }
    }

    fn server_down() -> ApiError {
        ApiError::Http { status: 500, message: "Impossible d'ajouter au panier".into() }
    }

    #[test]
    fn load_replaces_entries_and_stops_loading() {
        let vm = CartViewModel::new(FakeCart { entries: vec![entry("a", 2)], ..Default::default() });
        let recorder = Recorder::with_entries(vec![entry("old", 1)]);

        block_on(vm.load(&|a| recorder.dispatch(a))).unwrap();

        let store = recorder.store();
        assert_eq!(store.entries, vec![entry("a", 2)]);
        assert!(!store.loading);
        assert_eq!(store.error, None);
    }

    #[test]
    fn load_failure_sets_error() {
        let vm = CartViewModel::new(FakeCart { fail_with: Some(server_down()), ..Default::default() });
        let recorder = Recorder::with_entries(vec![]);

        assert!(block_on(vm.load(&|a| recorder.dispatch(a))).is_err());

        let store = recorder.store();
        assert!(!store.loading);
        assert!(store.error.is_some());
    }

    #[test]
    fn add_success_appends_server_entry() {
        let created = entry("srv-42", 3);
        let vm = CartViewModel::new(FakeCart { created: Some(created.clone()), ..Default::default() });
        let recorder = Recorder::with_entries(vec![entry("a", 1)]);

        block_on(vm.add_to_cart(&payload(), &|a| recorder.dispatch(a))).unwrap();

        assert_eq!(recorder.store().entries, vec![entry("a", 1), created]);
        assert_eq!(vm.api.received.borrow().as_slice(), &[payload()]);
    }

    #[test]
    fn add_failure_leaves_entries_unchanged_and_sets_error() {
        let vm = CartViewModel::new(FakeCart { fail_with: Some(server_down()), ..Default::default() });
        let before = vec![entry("a", 1), entry("b", 2)];
        let recorder = Recorder::with_entries(before.clone());

        let result = block_on(vm.add_to_cart(&payload(), &|a| recorder.dispatch(a)));

        assert!(result.is_err());
        let store = recorder.store();
        assert_eq!(store.entries, before);
        assert_eq!(store.error.as_deref(), Some("Impossible d'ajouter au panier"));
    }

    #[test]
    fn remove_failure_does_not_end_a_running_fetch() {
        let failing = CartViewModel::new(FakeCart { fail_with: Some(server_down()), ..Default::default() });
        let recorder = Recorder::with_entries(vec![entry("a", 1)]);
        recorder.dispatch(CartAction::FetchStarted);

        block_on(failing.remove_from_cart("a", &|a| recorder.dispatch(a))).unwrap_err();

        let store = recorder.store();
        assert!(store.loading);
        assert_eq!(store.entries, vec![entry("a", 1)]);
        assert!(store.error.is_some());
    }

    #[test]
    fn remove_and_clear_only_apply_on_success() {
        let ok = CartViewModel::new(FakeCart::default());
        let recorder = Recorder::with_entries(vec![entry("a", 1), entry("b", 1)]);
        block_on(ok.remove_from_cart("a", &|a| recorder.dispatch(a))).unwrap();
        assert_eq!(recorder.store().entries, vec![entry("b", 1)]);

        let failing = CartViewModel::new(FakeCart { fail_with: Some(server_down()), ..Default::default() });
        block_on(failing.clear_cart(&|a| recorder.dispatch(a))).unwrap_err();
        assert_eq!(recorder.store().entries, vec![entry("b", 1)]);

        block_on(ok.clear_cart(&|a| recorder.dispatch(a))).unwrap();
        assert!(recorder.store().entries.is_empty());
        assert_eq!(recorder.store().error, None);
    }
}
