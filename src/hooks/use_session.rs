// ============================================================================
// USE SESSION HOOK - Estado de sesión con reducer de Yew
// ============================================================================
// Se instancia UNA vez en SessionContextProvider; el resto de componentes lo
// leen por contexto.
// ============================================================================

use yew::prelude::*;

use crate::error::ApiResult;
use crate::hooks::use_mounted;
use crate::services::ApiClient;
use crate::stores::{SessionAction, SessionStatus, SessionStore};
use crate::utils::MountGuard;
use crate::viewmodels::SessionViewModel;

#[derive(Clone)]
pub struct SessionHandle {
    store: UseReducerHandle<SessionStore>,
    viewmodel: SessionViewModel,
    mounted: MountGuard,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl SessionHandle {
    pub fn status(&self) -> SessionStatus {
        self.store.status
    }

    pub fn username(&self) -> Option<String> {
        self.store.username.clone()
    }

    fn dispatcher(&self) -> impl Fn(SessionAction) {
        let store = self.store.clone();
        self.mounted.guard(move |action: SessionAction| store.dispatch(action))
    }

    /// Devuelve el error al formulario que llamó
    pub async fn login(&self, username: String, password: String) -> ApiResult<()> {
        let dispatch = self.dispatcher();
        self.viewmodel.login(&username, &password, &dispatch).await
    }

    pub async fn logout(&self) {
        let dispatch = self.dispatcher();
        self.viewmodel.logout(&dispatch).await;
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let store = use_reducer(SessionStore::default);
    let mounted = use_mounted();
    let viewmodel = SessionViewModel::new(ApiClient::new());

    // Comprobación de sesión al montar
    {
        let store = store.clone();
        let mounted = mounted.clone();
        let viewmodel = viewmodel.clone();
        use_effect_with((), move |_| {
            log::info!("🔍 Comprobando sesión en el backend...");
            wasm_bindgen_futures::spawn_local(async move {
                let dispatch = mounted.guard(move |action: SessionAction| store.dispatch(action));
                viewmodel.check_session(&dispatch).await;
            });
            || ()
        });
    }

    SessionHandle {
        store,
        viewmodel,
        mounted,
    }
}
