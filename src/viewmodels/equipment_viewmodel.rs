// ============================================================================
// EQUIPMENT VIEWMODEL - Selección de fournitures y payload del carrito
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::models::{CartEntryPayload, CartItem, EquipmentItem, SelectItem};

pub const MIN_QUANTITY: u32 = 0;
pub const MAX_QUANTITY: u32 = 99;

/// Convierte el texto del input en una cantidad dentro de [0, 99]
pub fn clamp_quantity_input(raw: &str) -> u32 {
    let raw = raw.trim();
    let value = match raw.parse::<i64>() {
        Ok(n) => n,
        // `as` satura: NaN -> 0, infinito -> límite
        Err(_) => raw.parse::<f64>().map(|f| f as i64).unwrap_or(0),
    };
    value.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u32
}

#[derive(Clone, Debug, PartialEq)]
pub struct EquipmentRow {
    pub item: EquipmentItem,
    pub selected: bool,
    pub quantity: u32,
}

/// Filas de la lista de fournitures de una escuela + clase
#[derive(Clone, Debug, PartialEq, Default)]
pub struct EquipmentSelection {
    rows: Vec<EquipmentRow>,
}

impl EquipmentSelection {
    pub fn from_items(items: Vec<EquipmentItem>) -> Self {
        let rows = items
            .into_iter()
            .map(|item| EquipmentRow {
                quantity: item.quantity.min(MAX_QUANTITY),
                item,
                selected: false,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[EquipmentRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn toggle(&mut self, id: i64) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.item.id == id) {
            row.selected = !row.selected;
        }
    }

    pub fn set_all(&mut self, selected: bool) {
        for row in &mut self.rows {
            row.selected = selected;
        }
    }

    pub fn set_quantity(&mut self, id: i64, quantity: u32) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.item.id == id) {
            row.quantity = quantity.min(MAX_QUANTITY);
        }
    }

    /// Seleccionadas con cantidad > 0; "seleccionada pero a cero" no se pide
    pub fn qualifying_items(&self) -> Vec<CartItem> {
        self.rows
            .iter()
            .filter(|row| row.selected && row.quantity > 0)
            .map(|row| CartItem {
                id: row.item.id,
                name: row.item.name.clone(),
                quantity: row.quantity,
            })
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|row| row.selected).count()
    }

    /// Guardar solo con escuela y clase con id numérico y al menos un artículo válido
    pub fn can_save(&self, school: Option<&SelectItem>, grade: Option<&SelectItem>) -> bool {
        has_numeric_id(school)
            && has_numeric_id(grade)
            && self.rows.iter().any(|row| row.selected && row.quantity > 0)
    }

    pub fn build_payload(
        &self,
        school: Option<&SelectItem>,
        grade: Option<&SelectItem>,
    ) -> Option<CartEntryPayload> {
        if !self.can_save(school, grade) {
            return None;
        }
        Some(CartEntryPayload {
            school: school?.to_named_ref()?,
            grade: grade?.to_named_ref()?,
            items: self.qualifying_items(),
        })
    }
}

/// Las entradas del carrito solo admiten ids enteros
fn has_numeric_id(item: Option<&SelectItem>) -> bool {
    item.and_then(|item| item.id.as_number()).is_some()
}

#[derive(Clone, Debug, PartialEq)]
pub enum EquipmentAction {
    Load(Vec<EquipmentItem>),
    Clear,
    Toggle(i64),
    SetAll(bool),
    SetQuantity(i64, u32),
}

impl Reducible for EquipmentSelection {
    type Action = EquipmentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EquipmentAction::Load(items) => next = EquipmentSelection::from_items(items),
            EquipmentAction::Clear => next = EquipmentSelection::default(),
            EquipmentAction::Toggle(id) => next.toggle(id),
            EquipmentAction::SetAll(selected) => next.set_all(selected),
            EquipmentAction::SetQuantity(id, quantity) => next.set_quantity(id, quantity),
        }
        Rc::new(next)
    }
}

// ----------------------------------------------------------------------------
// Botón "Ajouter au panier"
// ----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    /// Confirmación visible; vuelve a Idle tras el retraso configurado
    Saved,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SaveButtonState {
    pub status: SaveStatus,
    pub epoch: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveAction {
    Start,
    Succeeded,
    Failed,
    /// Timer de confirmación vencido
    Revert(u64),
}

impl SaveButtonState {
    pub fn is_disabled(&self, can_save: bool) -> bool {
        !can_save || self.status != SaveStatus::Idle
    }
}

impl Reducible for SaveButtonState {
    type Action = SaveAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (status, epoch) = match action {
            SaveAction::Start => (SaveStatus::Saving, self.epoch),
            SaveAction::Succeeded => (SaveStatus::Saved, self.epoch + 1),
            SaveAction::Failed => (SaveStatus::Idle, self.epoch),
            SaveAction::Revert(epoch) if epoch == self.epoch && self.status == SaveStatus::Saved => {
                (SaveStatus::Idle, self.epoch)
            }
            SaveAction::Revert(_) => return self,
        };
        Rc::new(SaveButtonState { status, epoch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> EquipmentItem {
        EquipmentItem { id, name: name.to_string(), description: None, quantity: 1 }
    }

    fn selection() -> EquipmentSelection {
        EquipmentSelection::from_items(vec![item(1, "Cahier"), item(2, "Stylo bleu"), item(3, "Gomme")])
    }

    fn school() -> SelectItem {
        SelectItem::new(7, "École Jean Moulin")
    }

    fn grade() -> SelectItem {
        SelectItem::new(3, "CM2")
    }

    #[test]
    fn typed_quantities_are_clamped() {
        assert_eq!(clamp_quantity_input("-5"), 0);
        assert_eq!(clamp_quantity_input("150"), 99);
        assert_eq!(clamp_quantity_input("99"), 99);
        assert_eq!(clamp_quantity_input(" 7 "), 7);
        assert_eq!(clamp_quantity_input("2.9"), 2);
        assert_eq!(clamp_quantity_input(""), 0);
        assert_eq!(clamp_quantity_input("abc"), 0);
        assert_eq!(clamp_quantity_input("99999999999999999999999"), 99);
    }

    #[test]
    fn payload_has_only_selected_nonzero_items() {
        let mut selection = selection();
        selection.toggle(1);
        selection.toggle(2);
        selection.set_quantity(1, 0);
        selection.set_quantity(2, 5);

        let payload = selection.build_payload(Some(&school()), Some(&grade())).unwrap();

        assert_eq!(payload.items, vec![CartItem { id: 2, name: "Stylo bleu".into(), quantity: 5 }]);
        assert_eq!(payload.school.id, 7);
        assert_eq!(payload.grade.name, "CM2");
    }

    #[test]
    fn save_disabled_without_school_grade_or_items() {
        let mut selection = selection();
        assert!(!selection.can_save(Some(&school()), Some(&grade())));

        selection.toggle(3);
        assert!(selection.can_save(Some(&school()), Some(&grade())));
        assert!(!selection.can_save(None, Some(&grade())));
        assert!(!selection.can_save(Some(&school()), None));

        selection.set_quantity(3, 0);
        assert!(!selection.can_save(Some(&school()), Some(&grade())));
        assert_eq!(selection.build_payload(Some(&school()), Some(&grade())), None);
    }

    #[test]
    fn save_disabled_when_school_or_grade_id_is_not_numeric() {
        let mut selection = selection();
        selection.toggle(1);
        let coded_school = SelectItem::new("EC-07", "École Jean Moulin");
        let coded_grade = SelectItem::new("cm2-a", "CM2 A");

        assert!(!selection.can_save(Some(&coded_school), Some(&grade())));
        assert!(!selection.can_save(Some(&school()), Some(&coded_grade)));
        assert_eq!(selection.build_payload(Some(&coded_school), Some(&grade())), None);

        // Un código numérico en texto sigue siendo válido
        let text_number = SelectItem::new("12", "6e");
        let payload = selection.build_payload(Some(&school()), Some(&text_number)).unwrap();
        assert_eq!(payload.grade.id, 12);
    }

    #[test]
    fn toggling_twice_deselects_and_set_all_covers_every_row() {
        let mut selection = selection();
        selection.toggle(1);
        selection.toggle(1);
        assert_eq!(selection.selected_count(), 0);

        selection.set_all(true);
        assert_eq!(selection.selected_count(), 3);
        assert_eq!(selection.qualifying_items().len(), 3);
    }

    #[test]
    fn suggested_quantity_is_capped() {
        let mut big = item(9, "Feuilles simples");
        big.quantity = 500;
        let selection = EquipmentSelection::from_items(vec![big]);
        assert_eq!(selection.rows()[0].quantity, 99);
    }

    #[test]
    fn reducer_load_replaces_previous_selection() {
        let state = Rc::new(EquipmentSelection::default())
            .reduce(EquipmentAction::Load(vec![item(1, "Cahier")]))
            .reduce(EquipmentAction::Toggle(1))
            .reduce(EquipmentAction::SetQuantity(1, 120));
        assert_eq!(state.qualifying_items()[0].quantity, 99);

        let state = state.reduce(EquipmentAction::Load(vec![item(5, "Compas")]));
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.rows()[0].item.name, "Compas");

        assert!(state.reduce(EquipmentAction::Clear).is_empty());
    }

    #[test]
    fn save_button_confirmation_reverts_once() {
        let state = Rc::new(SaveButtonState::default()).reduce(SaveAction::Start);
        assert!(state.is_disabled(true));

        let state = state.reduce(SaveAction::Succeeded);
        assert_eq!(state.status, SaveStatus::Saved);
        assert!(state.is_disabled(true));

        let epoch = state.epoch;
        let state = state.reduce(SaveAction::Revert(epoch));
        assert_eq!(state.status, SaveStatus::Idle);
        assert!(!state.is_disabled(true));
        assert!(state.is_disabled(false));
    }

    #[test]
    fn stale_revert_is_ignored() {
        let first = Rc::new(SaveButtonState::default())
            .reduce(SaveAction::Start)
            .reduce(SaveAction::Succeeded);
        let stale = first.epoch;
        let state = first
            .reduce(SaveAction::Revert(stale))
            .reduce(SaveAction::Start)
            .reduce(SaveAction::Succeeded)
            .reduce(SaveAction::Revert(stale));

        assert_eq!(state.status, SaveStatus::Saved);
    }

    #[test]
    fn failed_save_returns_to_idle() {
        let state = Rc::new(SaveButtonState::default())
            .reduce(SaveAction::Start)
            .reduce(SaveAction::Failed);
        assert_eq!(state.status, SaveStatus::Idle);
    }
}
