use leptos::prelude::*;
use once_cell::sync::OnceCell;

use super::{api, storage};
use crate::shared::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    /// Set when the server rejected the token, so the login page can say why
    pub expired: bool,
}

/// Session held at the application root.
///
/// Also registered process-wide so the HTTP layer can end the session on a 401
/// without a reactive owner at hand.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

static SESSION: OnceCell<AuthContext> = OnceCell::new();

impl AuthContext {
    /// Restore the session from localStorage and provide it via context
    pub fn install() -> Self {
        let ctx = Self {
            state: RwSignal::new(AuthState {
                token: storage::get_token(),
                expired: false,
            }),
        };
        if SESSION.set(ctx).is_err() {
            log::warn!("AuthContext installed twice; keeping the first one for 401 handling");
        }
        provide_context(ctx);
        ctx
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.token.is_some())
    }

    pub fn is_expired(&self) -> bool {
        self.state.with(|s| s.expired)
    }

    fn sign_in(&self, token: String) {
        storage::save_token(&token);
        self.state.set(AuthState {
            token: Some(token),
            expired: false,
        });
    }

    pub fn sign_out(&self) {
        storage::clear_token();
        self.state.set(AuthState::default());
    }

    fn expire(&self) {
        storage::clear_token();
        let _ = self.state.try_update(|s| {
            s.token = None;
            s.expired = true;
        });
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}

/// Called by the HTTP layer when the server answers 401
pub fn session_expired() {
    match SESSION.get() {
        Some(ctx) => ctx.expire(),
        None => storage::clear_token(),
    }
}

/// Helper: Perform login
pub async fn do_login(ctx: AuthContext, login: String, password: String) -> Result<(), ApiError> {
    let response = api::login(login, password).await?;
    log::info!("signed in");
    ctx.sign_in(response.token);
    Ok(())
}
