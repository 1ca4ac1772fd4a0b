use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::stores::SessionStatus;
use crate::utils::{HOME_PATH, LOGIN_PATH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Sesión sin resolver: no pintar nada
    Pending,
    Render,
    Redirect(&'static str),
}

pub fn is_public_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

pub fn decide(status: SessionStatus, path: &str) -> GuardDecision {
    match (status, is_public_path(path)) {
        (SessionStatus::Loading, _) => GuardDecision::Pending,
        (SessionStatus::Unauthenticated, true) => GuardDecision::Render,
        (SessionStatus::Unauthenticated, false) => GuardDecision::Redirect(LOGIN_PATH),
        (SessionStatus::Authenticated, true) => GuardDecision::Redirect(HOME_PATH),
        (SessionStatus::Authenticated, false) => GuardDecision::Render,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub path: String,
    pub on_redirect: Callback<String>,
    pub children: Children,
}

#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session_context();

    let status = match &session {
        Some(session) => session.status(),
        None => {
            log::error!("❌ RouteGuard fuera de SessionContextProvider");
            SessionStatus::Unauthenticated
        }
    };
    let decision = decide(status, &props.path);

    {
        let on_redirect = props.on_redirect.clone();
        use_effect_with(decision, move |decision| {
            if let GuardDecision::Redirect(target) = *decision {
                on_redirect.emit(target.to_string());
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::Pending | GuardDecision::Redirect(_) => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_renders_while_loading() {
        assert_eq!(decide(SessionStatus::Loading, "/"), GuardDecision::Pending);
        assert_eq!(decide(SessionStatus::Loading, "/login"), GuardDecision::Pending);
    }

    #[test]
    fn anonymous_users_are_sent_to_login() {
        assert_eq!(decide(SessionStatus::Unauthenticated, "/"), GuardDecision::Redirect("/login"));
        assert_eq!(decide(SessionStatus::Unauthenticated, "/cart"), GuardDecision::Redirect("/login"));
        assert_eq!(decide(SessionStatus::Unauthenticated, "/login"), GuardDecision::Render);
        assert_eq!(decide(SessionStatus::Unauthenticated, "/login/"), GuardDecision::Render);
    }

    #[test]
    fn authenticated_users_skip_login() {
        assert_eq!(decide(SessionStatus::Authenticated, "/login"), GuardDecision::Redirect("/"));
        assert_eq!(decide(SessionStatus::Authenticated, "/cart"), GuardDecision::Render);
        assert_eq!(decide(SessionStatus::Authenticated, "/"), GuardDecision::Render);
    }
}
