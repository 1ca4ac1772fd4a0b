use std::cell::Cell;
use std::rc::Rc;

/// Bandera compartida entre un componente y sus futures pendientes.
/// Las respuestas que llegan después del desmontaje se descartan.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }

    /// Envuelve un dispatcher para que no haga nada tras el desmontaje
    pub fn guard<T, F>(&self, f: F) -> impl Fn(T)
    where
        F: Fn(T),
    {
        let flag = self.clone();
        move |value| {
            if flag.is_mounted() {
                f(value);
            } else {
                log::debug!("⏭️ Componente desmontado, se ignora la respuesta");
            }
        }
    }
}

impl PartialEq for MountGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn guarded_dispatch_stops_after_unmount() {
        let seen = RefCell::new(Vec::new());
        let guard = MountGuard::new();
        let dispatch = guard.guard(|value: u32| seen.borrow_mut().push(value));

        dispatch(1);
        guard.clone().unmount();
        dispatch(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(!guard.is_mounted());
    }

    #[test]
    fn equality_is_identity() {
        let a = MountGuard::new();
        assert_eq!(a, a.clone());
        assert_ne!(a, MountGuard::new());
    }
}
