// ============================================================================
// SELECTOR VIEWMODEL - Estado del selector con búsqueda
// ============================================================================
// El cierre tras blur se programa con retraso; `close_epoch` invalida los
// cierres pendientes cuando llega un focus o una selección antes de que
// venza el retraso.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::models::SelectItem;

/// Lista de candidatos; dos listas son iguales solo si son la misma instancia,
/// así cualquier lista nueva reinicia el selector aunque tenga el mismo contenido
#[derive(Clone, Debug, Default)]
pub struct CandidateList(Rc<Vec<SelectItem>>);

impl CandidateList {
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self(Rc::new(items))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn items(&self) -> &[SelectItem] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for CandidateList {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SelectorState {
    pub query: String,
    pub open: bool,
    pub selected: Option<SelectItem>,
    pub close_epoch: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectorAction {
    Focus { disabled: bool },
    Input(String),
    /// Cierre diferido programado en el blur con la época vista en ese momento
    CloseIfCurrent(u64),
    Select(SelectItem),
    /// Nueva lista de candidatos
    Reset,
}

impl Reducible for SelectorState {
    type Action = SelectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SelectorAction::Focus { disabled } => {
                if disabled {
                    return self;
                }
                next.open = true;
                next.close_epoch += 1;
            }
            SelectorAction::Input(query) => {
                next.query = query;
                next.open = true;
                next.close_epoch += 1;
            }
            SelectorAction::CloseIfCurrent(epoch) => {
                if epoch != self.close_epoch || !self.open {
                    return self;
                }
                next.open = false;
            }
            SelectorAction::Select(item) => {
                next.query = item.name.clone();
                next.selected = Some(item);
                next.open = false;
                next.close_epoch += 1;
            }
            SelectorAction::Reset => {
                next.query.clear();
                next.selected = None;
            }
        }
        Rc::new(next)
    }
}

/// Pulsación sobre una fila: actualiza el estado y avisa al padre una sola vez
pub fn select_item(
    item: &SelectItem,
    dispatch: &dyn Fn(SelectorAction),
    on_select: &dyn Fn(SelectItem),
) {
    dispatch(SelectorAction::Select(item.clone()));
    on_select(item.clone());
}

/// Candidatos cuyo nombre contiene la búsqueda tal cual (sin distinguir mayúsculas),
/// en el orden original. Los espacios cuentan como parte de la búsqueda.
pub fn filter_items<'a>(items: &'a [SelectItem], query: &str) -> Vec<&'a SelectItem> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}
