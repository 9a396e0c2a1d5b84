#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, MemoryTokenStore, Profile, Role, User};
    use crate::state::session::{SessionState, TokenClaims};
    use leptos::*;
    use std::rc::Rc;

    pub fn user_with_role(role: Role) -> User {
        User {
            id: 9,
            username: "siti".into(),
            email: "siti@example.com".into(),
            role,
            is_active: true,
            profile: Some(Profile {
                id: 1,
                name: "Siti Rahma".into(),
                address: Some("Jl. Kemang Raya 10".into()),
                phone_number: Some("0812000000".into()),
                birth_date: Some("1995-04-12".into()),
                gender: Some("FEMALE".into()),
            }),
            schedule: None,
            store: None,
        }
    }

    pub fn provide_session(
        role: Option<Role>,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (session, set_session) = create_signal(SessionState {
            claims: role.map(|role| TokenClaims {
                sub: "siti".into(),
                role: Some(role.as_str().to_string()),
                exp: None,
            }),
            user: role.map(user_with_role),
            loading: false,
        });
        provide_context((session, set_session));
        (session, set_session)
    }

    /// Client pointed at an unroutable address; page tests never let
    /// resources load, so nothing is sent.
    pub fn provide_api_client() -> ApiClient {
        let client = ApiClient::new_with_base_url(
            "http://127.0.0.1:9/api",
            Rc::new(MemoryTokenStore::new(Some("test-token"))),
        );
        provide_context(client.clone());
        client
    }

    pub fn provide_page_context(role: Option<Role>) {
        provide_api_client();
        provide_session(role);
    }
}
