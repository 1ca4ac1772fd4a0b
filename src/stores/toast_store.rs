// ============================================================================
// TOAST STORE - Notificación transitoria
// ============================================================================
// Cada Show incrementa `generation`; un Expire de un timer viejo no hace nada.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn to_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastStore {
    pub current: Option<ToastMessage>,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Show(ToastMessage),
    Dismiss,
    /// Disparado por el timer que se programó para `generation`
    Expire(u64),
}

impl ToastStore {
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

impl Reducible for ToastStore {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message) => Rc::new(ToastStore {
                current: Some(message),
                generation: self.generation + 1,
            }),
            ToastAction::Dismiss => Rc::new(ToastStore {
                current: None,
                generation: self.generation,
            }),
            ToastAction::Expire(generation) if generation == self.generation && self.is_visible() => {
                Rc::new(ToastStore {
                    current: None,
                    generation: self.generation,
                })
            }
            ToastAction::Expire(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> ToastMessage {
        ToastMessage { text: "Ajouté au panier".into(), kind: ToastKind::Success }
    }

    #[test]
    fn expires_after_its_own_timer() {
        let store = Rc::new(ToastStore::default()).reduce(ToastAction::Show(saved()));
        let generation = store.generation;
        assert!(store.is_visible());

        let store = store.reduce(ToastAction::Expire(generation));
        assert!(!store.is_visible());
    }

    #[test]
    fn stale_timer_after_early_dismiss_is_ignored() {
        let store = Rc::new(ToastStore::default()).reduce(ToastAction::Show(saved()));
        let stale = store.generation;
        let store = store.reduce(ToastAction::Dismiss);

        let second = ToastMessage { text: "Panier vidé".into(), kind: ToastKind::Info };
        let store = store.reduce(ToastAction::Show(second.clone()));
        let store = store.reduce(ToastAction::Expire(stale));

        assert_eq!(store.current, Some(second));
    }

    #[test]
    fn expire_on_hidden_toast_returns_same_state() {
        let store = Rc::new(ToastStore::default());
        let next = store.clone().reduce(ToastAction::Expire(0));
        assert!(Rc::ptr_eq(&store, &next));
    }

    #[test]
    fn kinds_map_to_classes() {
        assert_eq!(ToastKind::Error.to_class(), "toast toast-error");
        assert_eq!(ToastKind::Success.to_class(), "toast toast-success");
    }
}
