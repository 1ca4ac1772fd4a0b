// ============================================================================
// SESSION STORE - Estado de autenticación de la sesión del navegador
// ============================================================================
// Loading -> {Authenticated, Unauthenticated}
// Reducer de Yew: las acciones las despacha SessionViewModel
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Comprobación inicial en curso: la UI protegida no se pinta
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub status: SessionStatus,
    pub username: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            status: SessionStatus::Loading,
            username: None,
        }
    }
}

impl SessionStore {
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Authenticated { username: Option<String> },
    Unauthenticated,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Authenticated { username } => Rc::new(SessionStore {
                status: SessionStatus::Authenticated,
                // Conserva el nombre conocido si el backend no lo repite
                username: username.or_else(|| self.username.clone()),
            }),
            SessionAction::Unauthenticated => Rc::new(SessionStore {
                status: SessionStatus::Unauthenticated,
                username: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let store = SessionStore::default();
        assert!(store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn unauthenticated_forgets_username() {
        let store = Rc::new(SessionStore::default())
            .reduce(SessionAction::Authenticated { username: Some("lea".into()) })
            .reduce(SessionAction::Unauthenticated);

        assert_eq!(store.status, SessionStatus::Unauthenticated);
        assert_eq!(store.username, None);
    }

    #[test]
    fn authenticated_keeps_previous_username_when_absent() {
        let store = Rc::new(SessionStore::default())
            .reduce(SessionAction::Authenticated { username: Some("lea".into()) })
            .reduce(SessionAction::Authenticated { username: None });

        assert!(store.is_authenticated());
        assert_eq!(store.username.as_deref(), Some("lea"));
    }
}
