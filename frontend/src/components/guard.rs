use crate::{
    api::Role,
    components::empty_state::LoadingState,
    state::session::{use_session, SessionState},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Loading,
    SignedOut,
    Denied,
    Granted,
}

fn resolve_access(state: &SessionState, allowed: &[Role]) -> Access {
    if state.loading {
        return Access::Loading;
    }
    if !state.has_session() {
        return Access::SignedOut;
    }
    match state.role() {
        Some(role) if allowed.contains(&role) => Access::Granted,
        _ => Access::Denied,
    }
}

#[component]
pub fn RequireRole(#[prop(into)] allowed: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let access = create_memo(move |_| session.with(|state| resolve_access(state, &allowed)));
    view! {
        <Show
            when=move || access.get() == Access::Granted
            fallback=move || match access.get() {
                Access::Loading => view! { <LoadingState /> }.into_view(),
                Access::SignedOut => view! {
                    <div class="p-6 bg-surface-elevated rounded-lg border border-border text-sm text-fg">
                        "You are not signed in. Sign in through the authentication portal to continue."
                    </div>
                }
                .into_view(),
                _ => view! {
                    <div class="p-6 bg-surface-elevated rounded-lg border border-border text-sm text-fg">
                        "You do not have access to this page."
                    </div>
                }
                .into_view(),
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::TokenClaims;

    fn claims_state(role: &str) -> SessionState {
        SessionState {
            claims: Some(TokenClaims {
                sub: "siti".into(),
                role: Some(role.into()),
                exp: None,
            }),
            user: None,
            loading: false,
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let state = SessionState {
            loading: true,
            ..claims_state("ROLE_OWNER")
        };
        assert_eq!(resolve_access(&state, &[Role::Owner]), Access::Loading);
    }

    #[test]
    fn no_session_is_signed_out() {
        assert_eq!(
            resolve_access(&SessionState::default(), &Role::ALL),
            Access::SignedOut
        );
    }

    #[test]
    fn role_must_be_allowed() {
        let state = claims_state("ROLE_EMPLOYEE");
        assert_eq!(resolve_access(&state, &[Role::Employee]), Access::Granted);
        assert_eq!(
            resolve_access(&state, &[Role::Owner, Role::Admin]),
            Access::Denied
        );
        assert_eq!(
            resolve_access(&claims_state("ROLE_GUEST"), &Role::ALL),
            Access::Denied
        );
    }
}
