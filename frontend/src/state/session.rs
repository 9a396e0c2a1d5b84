use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, LocalStorageTokenStore, Role, TokenStore, User};

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Claims read from the JWT payload. The signature is not checked here; the
/// backend verifies the token on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub claims: Option<TokenClaims>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role).or_else(|| {
            self.claims
                .as_ref()
                .and_then(|claims| claims.role.as_deref())
                .and_then(Role::parse)
        })
    }

    pub fn display_name(&self) -> String {
        if let Some(user) = &self.user {
            return user
                .profile
                .as_ref()
                .map(|profile| profile.name.clone())
                .unwrap_or_else(|| user.username.clone());
        }
        self.claims
            .as_ref()
            .map(|claims| claims.sub.clone())
            .unwrap_or_default()
    }

    pub fn has_session(&self) -> bool {
        self.claims.is_some() || self.user.is_some()
    }
}

pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn is_expired(claims: &TokenClaims, now_epoch_secs: i64) -> bool {
    claims.exp.is_some_and(|exp| exp <= now_epoch_secs)
}

fn create_session_context() -> SessionContext {
    let claims = match LocalStorageTokenStore.read_token() {
        Ok(token) => token.as_deref().and_then(decode_claims),
        Err(err) => {
            log::warn!("token slot unavailable: {}", err);
            None
        }
    };
    let now = chrono::Utc::now().timestamp();
    let claims = claims.filter(|claims| {
        let expired = is_expired(claims, now);
        if expired {
            log::info!("stored token for {} has expired", claims.sub);
        }
        !expired
    });
    let has_claims = claims.is_some();
    let (session, set_session) = create_signal(SessionState {
        claims,
        user: None,
        loading: has_claims,
    });

    if has_claims {
        let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        spawn_local(async move {
            let result = load_current_user(&api_client).await;
            apply_current_user(set_session, result);
        });
    }

    (session, set_session)
}

async fn load_current_user(api_client: &ApiClient) -> Result<User, ApiError> {
    api_client.get_me().await
}

pub fn apply_current_user(set_session: WriteSignal<SessionState>, result: Result<User, ApiError>) {
    match result {
        Ok(user) => set_session.update(|state| {
            state.user = Some(user);
            state.loading = false;
        }),
        Err(err) => {
            log::error!("failed to load current user: {}", err);
            set_session.update(|state| state.loading = false);
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{helpers::user_with_role, ssr::with_runtime};

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decode_claims_reads_role_and_subject() {
        let token = token_with_payload(r#"{"sub":"siti","role":"ROLE_ADMIN","exp":1900000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "siti");
        assert_eq!(claims.role.as_deref(), Some("ROLE_ADMIN"));
        assert!(!is_expired(&claims, 1_800_000_000));
        assert!(is_expired(&claims, 1_900_000_000));
    }

    #[test]
    fn decode_claims_rejects_garbage() {
        assert!(decode_claims("not-a-jwt").is_none());
        assert!(decode_claims("a.%%%.c").is_none());
        assert!(decode_claims(&token_with_payload("[1,2]")).is_none());
    }

    #[test]
    fn role_prefers_loaded_user_over_claims() {
        let mut state = SessionState {
            claims: Some(TokenClaims {
                sub: "siti".into(),
                role: Some("ROLE_EMPLOYEE".into()),
                exp: None,
            }),
            user: None,
            loading: false,
        };
        assert_eq!(state.role(), Some(Role::Employee));
        assert_eq!(state.display_name(), "siti");
        state.user = Some(user_with_role(Role::Admin));
        assert_eq!(state.role(), Some(Role::Admin));
        assert_eq!(state.display_name(), "Siti Rahma");
    }

    #[test]
    fn unknown_role_claim_resolves_to_none() {
        let state = SessionState {
            claims: Some(TokenClaims {
                sub: "x".into(),
                role: Some("ROLE_GUEST".into()),
                exp: None,
            }),
            ..SessionState::default()
        };
        assert_eq!(state.role(), None);
        assert!(state.has_session());
    }

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_session();
            let snapshot = state.get();
            assert!(!snapshot.has_session());
            assert!(!snapshot.loading);
        });
    }

    #[test]
    fn apply_current_user_clears_loading_on_error() {
        with_runtime(|| {
            let (state, set_state) = create_signal(SessionState {
                loading: true,
                ..SessionState::default()
            });
            apply_current_user(set_state, Err(ApiError::unauthorized("expired")));
            assert!(!state.get().loading);
            assert!(state.get().user.is_none());

            apply_current_user(set_state, Ok(user_with_role(Role::Owner)));
            assert_eq!(state.get().role(), Some(Role::Owner));
        });
    }
}
