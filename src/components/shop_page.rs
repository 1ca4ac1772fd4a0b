// ============================================================================
// SHOP PAGE - Escuela -> clase -> lista de fournitures -> carrito
// ============================================================================

use yew::prelude::*;

use super::equipment_list::EquipmentList;
use super::searchable_select::SearchableSelect;
use crate::config::CONFIG;
use crate::hooks::{use_cart_context, use_mounted, use_toast};
use crate::models::SelectItem;
use crate::services::{ApiClient, CatalogApi};
use crate::utils::DelayedAction;
use crate::viewmodels::{
    CandidateList, CatalogAction, CatalogLoading, EquipmentAction, EquipmentSelection, RequestSequence,
    SaveAction, SaveButtonState, SaveStatus,
};

#[function_component(ShopPage)]
pub fn shop_page() -> Html {
    let cart = use_cart_context();
    let toast = use_toast();
    let mounted = use_mounted();

    let schools = use_state(CandidateList::empty);
    let grades = use_state(CandidateList::empty);
    let school = use_state(|| None::<SelectItem>);
    let grade = use_state(|| None::<SelectItem>);
    let equipment = use_reducer(EquipmentSelection::default);
    let loading = use_reducer(CatalogLoading::new);
    let catalog_error = use_state(|| None::<String>);
    let save_state = use_reducer(SaveButtonState::default);
    let confirmation_timer = use_mut_ref(DelayedAction::new);
    let requests = use_state(RequestSequence::new);

    // Escuelas al montar
    {
        let schools = schools.clone();
        let loading = loading.clone();
        let catalog_error = catalog_error.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().get_schools().await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(list) => {
                        log::info!("✅ Escuelas cargadas: {}", list.len());
                        schools.set(CandidateList::new(list));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando escuelas: {}", e);
                        catalog_error.set(Some(e.to_string()));
                    }
                }
                loading.dispatch(CatalogAction::SchoolsSettled);
            });
            || ()
        });
    }

    {
        let confirmation_timer = confirmation_timer.clone();
        use_effect_with((), move |_| move || confirmation_timer.borrow_mut().cancel());
    }

    let on_school_select = {
        let school = school.clone();
        let grade = grade.clone();
        let grades = grades.clone();
        let loading = loading.clone();
        let equipment = equipment.clone();
        let catalog_error = catalog_error.clone();
        let requests = (*requests).clone();
        let mounted = mounted.clone();
        Callback::from(move |item: SelectItem| {
            log::info!("🏫 Escuela seleccionada: {}", item.name);
            school.set(Some(item.clone()));
            grade.set(None);
            equipment.dispatch(EquipmentAction::Clear);
            // lista nueva: el selector de clase se reinicia
            grades.set(CandidateList::empty());
            // también cancela el spinner de una lista de fournitures pendiente
            loading.dispatch(CatalogAction::SchoolChosen);
            catalog_error.set(None);

            let request = requests.next();
            let requests = requests.clone();
            let grades = grades.clone();
            let loading = loading.clone();
            let catalog_error = catalog_error.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().get_grades(&item.id).await;
                if !mounted.is_mounted() || !requests.is_current(request) {
                    return;
                }
                match result {
                    Ok(list) => grades.set(CandidateList::new(list)),
                    Err(e) => catalog_error.set(Some(e.to_string())),
                }
                loading.dispatch(CatalogAction::GradesSettled);
            });
        })
    };

    let on_grade_select = {
        let school = school.clone();
        let grade = grade.clone();
        let equipment = equipment.clone();
        let loading = loading.clone();
        let catalog_error = catalog_error.clone();
        let requests = (*requests).clone();
        let mounted = mounted.clone();
        Callback::from(move |item: SelectItem| {
            let Some(current_school) = (*school).clone() else { return };
            log::info!("📚 Clase seleccionada: {}", item.name);
            grade.set(Some(item.clone()));
            equipment.dispatch(EquipmentAction::Clear);
            loading.dispatch(CatalogAction::GradeChosen);
            catalog_error.set(None);

            let request = requests.next();
            let requests = requests.clone();
            let equipment = equipment.clone();
            let loading = loading.clone();
            let catalog_error = catalog_error.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().get_equipment(&current_school.id, &item.id).await;
                if !mounted.is_mounted() || !requests.is_current(request) {
                    return;
                }
                match result {
                    Ok(items) => equipment.dispatch(EquipmentAction::Load(items)),
                    Err(e) => catalog_error.set(Some(e.to_string())),
                }
                loading.dispatch(CatalogAction::EquipmentSettled);
            });
        })
    };

    let on_toggle = {
        let equipment = equipment.clone();
        Callback::from(move |id: i64| equipment.dispatch(EquipmentAction::Toggle(id)))
    };

    let on_quantity = {
        let equipment = equipment.clone();
        Callback::from(move |(id, quantity): (i64, u32)| {
            equipment.dispatch(EquipmentAction::SetQuantity(id, quantity))
        })
    };

    let on_select_all = {
        let equipment = equipment.clone();
        Callback::from(move |selected: bool| equipment.dispatch(EquipmentAction::SetAll(selected)))
    };

    let can_save = equipment.can_save((*school).as_ref(), (*grade).as_ref());
    let save_disabled = cart.is_none() || save_state.is_disabled(can_save);

    let on_save = {
        let cart = cart.clone();
        let toast = toast.clone();
        let equipment = equipment.clone();
        let school = school.clone();
        let grade = grade.clone();
        let save_state = save_state.clone();
        let confirmation_timer = confirmation_timer.clone();
        let mounted = mounted.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(cart) = cart.clone() else { return };
            if save_state.status != SaveStatus::Idle {
                return;
            }
            let Some(payload) = equipment.build_payload((*school).as_ref(), (*grade).as_ref()) else {
                return;
            };

            // Deshabilitar ya, antes de la respuesta
            save_state.dispatch(SaveAction::Start);
            let confirmed_epoch = save_state.epoch + 1;

            let toast = toast.clone();
            let save_state = save_state.clone();
            let confirmation_timer = confirmation_timer.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = cart.add_to_cart(payload).await;
                if !mounted.is_mounted() {
                    return;
                }
                match result {
                    Ok(()) => {
                        save_state.dispatch(SaveAction::Succeeded);
                        if let Some(toast) = &toast {
                            toast.success("Liste ajoutée au panier");
                        }
                        let save_state = save_state.clone();
                        confirmation_timer
                            .borrow_mut()
                            .schedule(CONFIG.ui_config.save_confirmation_ms, move || {
                                save_state.dispatch(SaveAction::Revert(confirmed_epoch));
                            });
                    }
                    Err(e) => {
                        save_state.dispatch(SaveAction::Failed);
                        if let Some(toast) = &toast {
                            toast.error(e.to_string());
                        }
                    }
                }
            });
        })
    };

    let save_label = match save_state.status {
        SaveStatus::Idle => "Ajouter au panier".to_string(),
        SaveStatus::Saving => "Ajout en cours...".to_string(),
        SaveStatus::Saved => "✓ Ajouté au panier".to_string(),
    };
    let item_count = equipment.qualifying_items().len();

    html! {
        <main class="shop-page">
            <section class="selection-panel">
                <SearchableSelect
                    id="school-select"
                    label="École"
                    placeholder="Rechercher une école..."
                    items={(*schools).clone()}
                    loading={loading.schools}
                    on_select={on_school_select}
                />
                <SearchableSelect
                    id="grade-select"
                    label="Classe"
                    placeholder="Rechercher une classe..."
                    items={(*grades).clone()}
                    loading={loading.grades}
                    disabled={school.is_none()}
                    on_select={on_grade_select}
                />
            </section>

            if let Some(message) = (*catalog_error).clone() {
                <div class="error-banner" role="alert">{ message }</div>
            }

            <section class="equipment-panel">
                <EquipmentList
                    rows={equipment.rows().to_vec()}
                    loading={loading.equipment}
                    on_toggle={on_toggle}
                    on_quantity={on_quantity}
                    on_select_all={on_select_all}
                />
            </section>

            <footer class="save-bar">
                <span class="save-summary">
                    { format!("{} article(s) sélectionné(s)", item_count) }
                </span>
                <button
                    type="button"
                    class={classes!("btn-save", (save_state.status == SaveStatus::Saved).then_some("saved"))}
                    disabled={save_disabled}
                    onclick={on_save}
                >
                    { save_label }
                </button>
            </footer>
        </main>
    }
}
