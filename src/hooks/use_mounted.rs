use yew::prelude::*;

use crate::utils::MountGuard;

/// Guard que pasa a "desmontado" en el cleanup del componente
#[hook]
pub fn use_mounted() -> MountGuard {
    let guard = use_state(MountGuard::new);

    {
        let guard = (*guard).clone();
        use_effect_with((), move |_| move || guard.unmount());
    }

    (*guard).clone()
}
