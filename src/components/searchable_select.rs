// ============================================================================
// SEARCHABLE SELECT - Input con lista filtrada (escuela, clase...)
// ============================================================================
// La lista se cierra con retraso tras el blur para que el mousedown sobre una
// fila (que llega antes del blur) se registre primero.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::SelectItem;
use crate::utils::DelayedAction;
use crate::viewmodels::{filter_items, select_item, CandidateList, SelectorAction, SelectorState};

#[derive(Properties, PartialEq)]
pub struct SearchableSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub items: CandidateList,
    pub on_select: Callback<SelectItem>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(SearchableSelect)]
pub fn searchable_select(props: &SearchableSelectProps) -> Html {
    let state = use_reducer(SelectorState::default);
    let close_timer = use_mut_ref(DelayedAction::new);

    // Lista nueva => se borra texto y selección
    {
        let state = state.clone();
        use_effect_with(props.items.clone(), move |_| {
            state.dispatch(SelectorAction::Reset);
            || ()
        });
    }

    // Ningún cierre pendiente sobrevive al componente
    {
        let close_timer = close_timer.clone();
        use_effect_with((), move |_| move || close_timer.borrow_mut().cancel());
    }

    let on_focus = {
        let state = state.clone();
        let close_timer = close_timer.clone();
        let disabled = props.disabled;
        Callback::from(move |_: FocusEvent| {
            close_timer.borrow_mut().cancel();
            state.dispatch(SelectorAction::Focus { disabled });
        })
    };

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(SelectorAction::Input(input.value()));
        })
    };

    let on_blur = {
        let state = state.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: FocusEvent| {
            let epoch = state.close_epoch;
            let state = state.clone();
            close_timer
                .borrow_mut()
                .schedule(CONFIG.ui_config.select_close_delay_ms, move || {
                    state.dispatch(SelectorAction::CloseIfCurrent(epoch));
                });
        })
    };

    let matches = filter_items(props.items.items(), &state.query);
    let show_list = state.open && !props.disabled;

    html! {
        <div class={classes!("searchable-select", props.disabled.then_some("disabled"))}>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                type="text"
                id={props.id.clone()}
                autocomplete="off"
                placeholder={props.placeholder.clone()}
                value={state.query.clone()}
                disabled={props.disabled}
                onfocus={on_focus}
                oninput={on_input}
                onblur={on_blur}
            />
            if show_list {
                <ul class="select-options" role="listbox">
                    if props.loading {
                        <li class="select-empty">{"Chargement..."}</li>
                    } else if matches.is_empty() {
                        <li class="select-empty">{"Aucun résultat"}</li>
                    } else {
                        { for matches.into_iter().map(|item| {
                            let is_selected = state.selected.as_ref().map(|s| s.id == item.id).unwrap_or(false);
                            // mousedown y no click: llega antes del blur del input
                            let on_press = {
                                let item = item.clone();
                                let state = state.clone();
                                let close_timer = close_timer.clone();
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| {
                                    close_timer.borrow_mut().cancel();
                                    select_item(
                                        &item,
                                        &|action| state.dispatch(action),
                                        &|chosen| on_select.emit(chosen),
                                    );
                                })
                            };
                            html! {
                                <li
                                    key={item.id.to_string()}
                                    class={classes!("select-option", is_selected.then_some("selected"))}
                                    role="option"
                                    onmousedown={on_press}
                                >
                                    { &item.name }
                                </li>
                            }
                        }) }
                    }
                </ul>
            }
        </div>
    }
}
