use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_toast_store, ToastHandle};
use crate::stores::ToastAction;
use crate::utils::DelayedAction;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Proporciona ToastHandle y pinta la notificación activa
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toast = use_toast_store();
    let expire_timer = use_mut_ref(DelayedAction::new);

    // Un timer por notificación visible; el cleanup lo cancela al ocultarla,
    // al mostrar otra o al desmontar
    {
        let store = toast.store.clone();
        let expire_timer = expire_timer.clone();
        let generation = toast.store.generation;
        let visible = toast.store.is_visible();
        use_effect_with((generation, visible), move |_| {
            if visible {
                expire_timer
                    .borrow_mut()
                    .schedule(CONFIG.ui_config.toast_duration_ms, move || {
                        store.dispatch(ToastAction::Expire(generation));
                    });
            }
            move || expire_timer.borrow_mut().cancel()
        });
    }

    let view = match &toast.store.current {
        Some(message) => {
            let on_dismiss = {
                let toast = toast.clone();
                Callback::from(move |_: MouseEvent| toast.dismiss())
            };
            html! {
                <div class={message.kind.to_class()} role="status">
                    <span>{ &message.text }</span>
                    <button type="button" class="btn-close" onclick={on_dismiss}>{"✕"}</button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<ToastHandle> context={toast.clone()}>
            {props.children.clone()}
            { view }
        </ContextProvider<ToastHandle>>
    }
}
