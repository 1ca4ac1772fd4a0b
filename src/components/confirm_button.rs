use yew::prelude::*;

use crate::config::CONFIG;
use crate::utils::DelayedAction;

#[derive(Properties, PartialEq)]
pub struct ConfirmButtonProps {
    pub label: AttrValue,
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Primer click arma el botón, el segundo (dentro de la ventana) confirma
#[function_component(ConfirmButton)]
pub fn confirm_button(props: &ConfirmButtonProps) -> Html {
    let armed = use_state(|| false);
    let disarm_timer = use_mut_ref(DelayedAction::new);

    {
        let disarm_timer = disarm_timer.clone();
        use_effect_with((), move |_| move || disarm_timer.borrow_mut().cancel());
    }

    let onclick = {
        let armed = armed.clone();
        let disarm_timer = disarm_timer.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            if *armed {
                disarm_timer.borrow_mut().cancel();
                armed.set(false);
                on_confirm.emit(());
            } else {
                armed.set(true);
                let armed = armed.clone();
                disarm_timer
                    .borrow_mut()
                    .schedule(CONFIG.ui_config.confirm_window_ms, move || armed.set(false));
            }
        })
    };

    let label = if *armed { props.confirm_label.clone() } else { props.label.clone() };

    html! {
        <button
            type="button"
            class={classes!(props.class.clone(), armed.then_some("armed"))}
            disabled={props.disabled}
            {onclick}
        >
            { label }
        </button>
    }
}
