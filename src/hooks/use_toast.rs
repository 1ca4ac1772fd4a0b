use yew::prelude::*;

use crate::stores::{ToastAction, ToastKind, ToastMessage, ToastStore};

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub store: UseReducerHandle<ToastStore>,
}

impl ToastHandle {
    pub fn show(&self, text: impl Into<String>, kind: ToastKind) {
        self.store.dispatch(ToastAction::Show(ToastMessage {
            text: text.into(),
            kind,
        }));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text, ToastKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text, ToastKind::Error);
    }

    pub fn dismiss(&self) {
        self.store.dispatch(ToastAction::Dismiss);
    }
}

#[hook]
pub fn use_toast_store() -> ToastHandle {
    ToastHandle {
        store: use_reducer(ToastStore::default),
    }
}

#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}
