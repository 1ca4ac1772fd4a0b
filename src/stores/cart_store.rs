// ============================================================================
// CART STORE - Entradas del carrito del usuario autenticado
// ============================================================================
// El servidor es la fuente de verdad: la lista local solo cambia después
// de una respuesta correcta (nada optimista).
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::models::CartEntry;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CartStore {
    pub entries: Vec<CartEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    FetchStarted,
    /// Reemplaza la lista completa (el último fetch gana)
    Fetched(Vec<CartEntry>),
    Added(CartEntry),
    Removed(String),
    Cleared,
    /// Fallo del GET /cart; termina la carga, la lista no cambia
    FetchFailed(String),
    /// Fallo de add/remove/clear; no toca `loading` (puede haber un fetch en vuelo)
    MutationFailed(String),
    DismissError,
}

impl CartStore {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(CartEntry::total_quantity).sum()
    }
}

impl Reducible for CartStore {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CartAction::FetchStarted => {
                next.loading = true;
            }
            CartAction::Fetched(entries) => {
                next.entries = entries;
                next.loading = false;
                next.error = None;
            }
            CartAction::Added(entry) => {
                next.entries.push(entry);
                next.error = None;
            }
            CartAction::Removed(id) => {
                next.entries.retain(|entry| entry.id != id);
                next.error = None;
            }
            CartAction::Cleared => {
                next.entries.clear();
                next.error = None;
            }
            CartAction::FetchFailed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            CartAction::MutationFailed(message) => {
                next.error = Some(message);
            }
            CartAction::DismissError => {
                next.error = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{CartItem, NamedRef};

    pub(crate) fn entry(id: &str, quantity: u32) -> CartEntry {
        CartEntry {
            id: id.to_string(),
            timestamp: 1_700_000_000_000,
            school: NamedRef { id: 1, name: "École du Centre".into() },
            grade: NamedRef { id: 2, name: "CP".into() },
            items: vec![CartItem { id: 10, name: "Crayons de couleur".into(), quantity }],
        }
    }

    fn reduce_all(actions: Vec<CartAction>) -> Rc<CartStore> {
        actions
            .into_iter()
            .fold(Rc::new(CartStore::default()), |store, action| store.reduce(action))
    }

    #[test]
    fn fetch_tracks_loading_separately() {
        let store = reduce_all(vec![CartAction::FetchStarted]);
        assert!(store.loading);
        assert!(store.is_empty());

        let store = store.reduce(CartAction::Fetched(vec![entry("a", 1)]));
        assert!(!store.loading);
        assert_eq!(store.entries.len(), 1);
    }

    #[test]
    fn added_entry_goes_to_the_end() {
        let store = reduce_all(vec![
            CartAction::Fetched(vec![entry("a", 1), entry("b", 2)]),
            CartAction::Added(entry("c", 3)),
        ]);
        let ids: Vec<_> = store.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(store.total_items(), 6);
    }

    #[test]
    fn removed_only_drops_matching_id() {
        let store = reduce_all(vec![
            CartAction::Fetched(vec![entry("a", 1), entry("b", 2)]),
            CartAction::Removed("a".into()),
            CartAction::Removed("zzz".into()),
        ]);
        assert_eq!(store.entries, vec![entry("b", 2)]);
    }

    #[test]
    fn failure_keeps_entries_and_sets_error() {
        let store = reduce_all(vec![
            CartAction::Fetched(vec![entry("a", 1)]),
            CartAction::MutationFailed("Impossible de vider le panier".into()),
        ]);
        assert_eq!(store.entries, vec![entry("a", 1)]);
        assert_eq!(store.error.as_deref(), Some("Impossible de vider le panier"));

        let store = store.reduce(CartAction::DismissError);
        assert_eq!(store.error, None);
    }

    #[test]
    fn mutation_failure_during_fetch_keeps_loading() {
        let store = reduce_all(vec![
            CartAction::Fetched(vec![entry("a", 1)]),
            CartAction::FetchStarted,
            CartAction::MutationFailed("Impossible de supprimer l'entrée".into()),
        ]);
        assert!(store.loading);
        assert_eq!(store.entries, vec![entry("a", 1)]);
        assert_eq!(store.error.as_deref(), Some("Impossible de supprimer l'entrée"));

        let store = store.reduce(CartAction::Fetched(vec![entry("a", 1)]));
        assert!(!store.loading);
    }

    #[test]
    fn fetch_failure_ends_loading() {
        let store = reduce_all(vec![
            CartAction::FetchStarted,
            CartAction::FetchFailed("Impossible de charger le panier".into()),
        ]);
        assert!(!store.loading);
        assert!(store.is_empty());
        assert_eq!(store.error.as_deref(), Some("Impossible de charger le panier"));
    }

    #[test]
    fn refresh_replaces_list_wholesale() {
        let store = reduce_all(vec![
            CartAction::Fetched(vec![entry("a", 1)]),
            CartAction::Added(entry("b", 1)),
            CartAction::Fetched(vec![entry("x", 5)]),
        ]);
        assert_eq!(store.entries, vec![entry("x", 5)]);
    }

    #[test]
    fn cleared_empties_the_list() {
        let store = reduce_all(vec![
            CartAction::Fetched(vec![entry("a", 1), entry("b", 1)]),
            CartAction::Cleared,
        ]);
        assert!(store.is_empty());
    }
}
