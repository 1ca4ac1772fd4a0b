// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Llama al API y despacha acciones al SessionStore; los hooks solo conectan
// el dispatcher de Yew.
// ============================================================================

use crate::error::ApiResult;
use crate::models::LoginRequest;
use crate::services::{ApiClient, AuthApi};
use crate::stores::SessionAction;

/// ViewModel de sesión - SOLO lógica de negocio
#[derive(Clone, PartialEq)]
pub struct SessionViewModel<A = ApiClient> {
    api: A,
}

impl<A: AuthApi> SessionViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Comprobación inicial: cualquier error deja la sesión sin autenticar
    pub async fn check_session(&self, dispatch: &dyn Fn(SessionAction)) {
        match self.api.check_auth().await {
            Ok(response) if response.authenticated != Some(false) => {
                log::info!("✅ Sesión activa");
                dispatch(SessionAction::Authenticated { username: response.username });
            }
            Ok(_) => {
                log::info!("ℹ️ Backend informa sesión no autenticada");
                dispatch(SessionAction::Unauthenticated);
            }
            Err(e) => {
                log::info!("ℹ️ Sin sesión: {}", e);
                dispatch(SessionAction::Unauthenticated);
            }
        }
    }

    /// Login; el error se devuelve al formulario para mostrarlo
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        dispatch: &dyn Fn(SessionAction),
    ) -> ApiResult<()> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            Ok(response) => {
                log::info!("✅ Login exitoso: {}", username);
                let username = response.username.or_else(|| Some(username.to_string()));
                dispatch(SessionAction::Authenticated { username });
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Login fallido: {}", e);
                dispatch(SessionAction::Unauthenticated);
                Err(e)
            }
        }
    }

    /// Logout "best effort": el estado local siempre termina sin autenticar
    pub async fn logout(&self, dispatch: &dyn Fn(SessionAction)) {
        if let Err(e) = self.api.logout().await {
            log::warn!("⚠️ Logout en el servidor falló, se cierra la sesión local igualmente: {}", e);
        }
        dispatch(SessionAction::Unauthenticated);
    }
}
