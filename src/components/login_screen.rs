use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::hooks::{use_mounted, use_session_context};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session_context();
    let mounted = use_mounted();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let Some(session) = session.clone() else {
                log::error!("❌ LoginScreen sin SessionContextProvider");
                return;
            };

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value().trim().to_string();
                let password = password_input.value();

                // Validate fields
                if username.is_empty() || password.is_empty() {
                    error.set(Some("Veuillez remplir tous les champs".to_string()));
                    return;
                }

                error.set(None);
                submitting.set(true);

                let error = error.clone();
                let submitting = submitting.clone();
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = session.login(username, password).await;
                    // Tras un login correcto el guard redirige y este componente se desmonta
                    if !mounted.is_mounted() {
                        return;
                    }
                    submitting.set(false);
                    if let Err(e) = result {
                        error.set(Some(e.to_string()));
                    }
                });
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🎒"}</div>
                    </div>
                    <h1>{"Fournitures scolaires"}</h1>
                    <p>{"Connectez-vous pour préparer vos listes"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Identifiant"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Mot de passe"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="form-error" role="alert">{ message }</div>
                    }

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        <span class="btn-text">
                            { if *submitting { "Connexion..." } else { "Se connecter" } }
                        </span>
                    </button>
                </form>
            </div>
        </div>
    }
}
