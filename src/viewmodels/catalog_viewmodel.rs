// ============================================================================
// CATALOG VIEWMODEL - Carga escuela -> clase -> lista de fournitures
// ============================================================================
// Cada elección nueva invalida las peticiones anteriores: solo se aplica la
// respuesta de la última. Los flags de carga se llevan aparte para que una
// respuesta descartada no deje ningún spinner colgado.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use yew::Reducible;

/// Identificadores de petición; la última emitida es la única vigente
#[derive(Clone, Debug, Default)]
pub struct RequestSequence(Rc<Cell<u64>>);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        let id = self.0.get() + 1;
        self.0.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.0.get() == id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogLoading {
    pub schools: bool,
    pub grades: bool,
    pub equipment: bool,
}

impl CatalogLoading {
    /// Las escuelas se piden al montar
    pub fn new() -> Self {
        Self {
            schools: true,
            grades: false,
            equipment: false,
        }
    }
}

impl Default for CatalogLoading {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction {
    SchoolsSettled,
    /// Nueva escuela: la lista de la clase anterior ya no se espera
    SchoolChosen,
    GradesSettled,
    GradeChosen,
    EquipmentSettled,
}

impl Reducible for CatalogLoading {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CatalogAction::SchoolsSettled => next.schools = false,
            CatalogAction::SchoolChosen => {
                next.grades = true;
                next.equipment = false;
            }
            CatalogAction::GradesSettled => next.grades = false,
            CatalogAction::GradeChosen => next.equipment = true,
            CatalogAction::EquipmentSettled => next.equipment = false,
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}
