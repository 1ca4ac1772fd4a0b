use gloo_timers::callback::Timeout;

/// Acción diferida cancelable
///
/// Programar de nuevo cancela la anterior; soltar el valor (p. ej. al
/// desmontar el componente que lo guarda) también la cancela.
#[derive(Default)]
pub struct DelayedAction {
    pending: Option<Timeout>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, delay_ms: u32, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, action));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}
