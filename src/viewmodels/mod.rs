// ViewModels: lógica de negocio sin DOM, probada en nativo

pub mod session_viewmodel;
pub mod cart_viewmodel;
pub mod selector_viewmodel;
pub mod equipment_viewmodel;
pub mod catalog_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use cart_viewmodel::CartViewModel;
pub use selector_viewmodel::{filter_items, select_item, CandidateList, SelectorAction, SelectorState};
pub use equipment_viewmodel::{
    clamp_quantity_input, EquipmentAction, EquipmentRow, EquipmentSelection, SaveAction, SaveButtonState,
    SaveStatus, MAX_QUANTITY,
};
pub use catalog_viewmodel::{CatalogAction, CatalogLoading, RequestSequence};
