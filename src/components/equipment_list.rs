use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::viewmodels::{clamp_quantity_input, EquipmentRow, MAX_QUANTITY};

#[derive(Properties, PartialEq, Clone)]
pub struct EquipmentRowViewProps {
    pub row: EquipmentRow,
    pub on_toggle: Callback<i64>,
    pub on_quantity: Callback<(i64, u32)>, // ya acotada a [0, 99]
}

#[function_component(EquipmentRowView)]
pub fn equipment_row_view(props: &EquipmentRowViewProps) -> Html {
    let row = &props.row;
    let id = row.item.id;

    let on_toggle = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_: Event| cb.emit(id))
    };

    let on_input = {
        let cb = props.on_quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let quantity = clamp_quantity_input(&input.value());
            // refleja el valor acotado aunque el estado no cambie
            input.set_value(&quantity.to_string());
            cb.emit((id, quantity));
        })
    };

    let on_decrement = {
        let cb = props.on_quantity.clone();
        let quantity = row.quantity;
        Callback::from(move |_: MouseEvent| cb.emit((id, quantity.saturating_sub(1))))
    };

    let on_increment = {
        let cb = props.on_quantity.clone();
        let quantity = row.quantity;
        Callback::from(move |_: MouseEvent| cb.emit((id, (quantity + 1).min(MAX_QUANTITY))))
    };

    let checkbox_id = format!("equipment-{}", id);

    html! {
        <li class={classes!("equipment-row", row.selected.then_some("selected"))}>
            <input type="checkbox" id={checkbox_id.clone()} checked={row.selected} onchange={on_toggle} />
            <label for={checkbox_id} class="equipment-name">
                { &row.item.name }
                if let Some(description) = &row.item.description {
                    <span class="equipment-description">{ description }</span>
                }
            </label>
            <div class="quantity-control">
                <button type="button" class="btn-qty" disabled={!row.selected || row.quantity == 0} onclick={on_decrement}>{"−"}</button>
                <input
                    type="number"
                    class="quantity-input"
                    min="0"
                    max={MAX_QUANTITY.to_string()}
                    value={row.quantity.to_string()}
                    disabled={!row.selected}
                    oninput={on_input}
                />
                <button type="button" class="btn-qty" disabled={!row.selected || row.quantity >= MAX_QUANTITY} onclick={on_increment}>{"+"}</button>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct EquipmentListProps {
    pub rows: Vec<EquipmentRow>,
    pub on_toggle: Callback<i64>,
    pub on_quantity: Callback<(i64, u32)>,
    pub on_select_all: Callback<bool>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(EquipmentList)]
pub fn equipment_list(props: &EquipmentListProps) -> Html {
    if props.loading {
        return html! { <div class="equipment-loading">{"⏳ Chargement de la liste..."}</div> };
    }
    if props.rows.is_empty() {
        return html! { <div class="equipment-empty">{"Choisissez une école et une classe pour voir la liste."}</div> };
    }

    let all_selected = props.rows.iter().all(|row| row.selected);
    let on_select_all = {
        let cb = props.on_select_all.clone();
        Callback::from(move |_: MouseEvent| cb.emit(!all_selected))
    };

    html! {
        <div class="equipment-list">
            <div class="equipment-list-header">
                <span>{ format!("{} articles", props.rows.len()) }</span>
                <button type="button" class="btn-link" onclick={on_select_all}>
                    { if all_selected { "Tout désélectionner" } else { "Tout sélectionner" } }
                </button>
            </div>
            <ul>
                { for props.rows.iter().map(|row| html! {
                    <EquipmentRowView
                        key={row.item.id.to_string()}
                        row={row.clone()}
                        on_toggle={props.on_toggle.clone()}
                        on_quantity={props.on_quantity.clone()}
                    />
                }) }
            </ul>
        </div>
    }
}
