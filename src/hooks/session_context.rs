// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Usa Context API de Yew en lugar de un singleton global
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_session::{use_session, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Provider component que envuelve la app y proporciona el estado de sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<SessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// None fuera de SessionContextProvider
#[hook]
pub fn use_session_context() -> Option<SessionHandle> {
    use_context::<SessionHandle>()
}
