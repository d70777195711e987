//! Session controller bridging the token store and the backend.
//!
//! Holds the single coherent authentication state for the process: the
//! last-known admin identity, the loading/error surface, and the expiry
//! counters recomputed by the poll tick. All transitions happen on one
//! logical timeline - the controller is `&mut`-owned by whatever drives it,
//! so a login landing between ticks simply wins with last-write semantics.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::auth::token::{TokenStore, DEFAULT_TOKEN_TTL_SECS};
use crate::models::{AdminUser, LoginResponse};

/// Poll interval for expiry checks while authenticated (seconds).
pub const POLL_INTERVAL_SECS: u64 = 10;

pub struct SessionManager {
    api: ApiClient,
    store: Arc<TokenStore>,
    user: Option<AdminUser>,
    authenticated: bool,
    loading: bool,
    error: Option<String>,
    expiring_soon: bool,
    time_until_expiry: i64,
}

impl SessionManager {
    pub fn new(api: ApiClient, store: Arc<TokenStore>) -> Self {
        Self {
            api,
            store,
            user: None,
            authenticated: false,
            loading: true,
            error: None,
            expiring_soon: false,
            time_until_expiry: 0,
        }
    }

    /// Startup check: ask the backend to verify any persisted token.
    /// A token the backend rejects, or one that cannot be verified at all,
    /// is cleared. Never fails; ends the loading state exactly once.
    pub async fn initialize(&mut self) {
        if self.store.has_valid_token() {
            match self.api.verify_token().await {
                Ok(verification) if verification.valid && verification.user.is_some() => {
                    self.user = verification.user;
                    self.authenticated = true;
                    self.refresh_expiry();
                }
                Ok(_) => {
                    debug!("Stored token rejected by backend");
                    self.store.clear();
                    self.authenticated = false;
                }
                Err(e) => {
                    debug!(error = %e, "Token verification failed");
                    self.store.clear();
                    self.authenticated = false;
                }
            }
        }
        self.loading = false;
    }

    /// Admin login. On success the token is persisted with the
    /// server-supplied lifetime (default 1 hour) and the session becomes
    /// authenticated. On failure the error surface is set and the failure
    /// propagates to the caller for form-level handling.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.loading = true;
        self.error = None;

        match self.api.login(email, password).await {
            Ok(LoginResponse {
                success: true,
                token: Some(token),
                user: Some(user),
                expires_in,
                ..
            }) => {
                self.store
                    .set_token(&token, expires_in.unwrap_or(DEFAULT_TOKEN_TTL_SECS));
                info!(email = %user.email, "Admin login succeeded");
                self.user = Some(user);
                self.authenticated = true;
                self.refresh_expiry();
                self.loading = false;
                Ok(())
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Login failed".to_string());
                self.fail_login(message.clone());
                Err(anyhow::anyhow!(message))
            }
            Err(e) => {
                self.fail_login(e.user_message());
                Err(e.into())
            }
        }
    }

    fn fail_login(&mut self, message: String) {
        debug!(message = %message, "Login failed");
        self.error = Some(message);
        self.authenticated = false;
        self.user = None;
        self.loading = false;
    }

    /// Logout always succeeds locally; the backend call is best effort and
    /// its failure is swallowed.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            debug!(error = %e, "Backend logout failed, clearing local session anyway");
        }
        self.store.clear();
        self.user = None;
        self.authenticated = false;
        self.error = None;
        self.expiring_soon = false;
        self.time_until_expiry = 0;
    }

    /// One poll step, scheduled every `POLL_INTERVAL_SECS` while
    /// authenticated: recompute the expiry counters and detect silent
    /// expiry. Expiry reached here surfaces no error - this path is
    /// distinct from an explicit logout or a 401.
    pub fn tick(&mut self) {
        if !self.authenticated {
            return;
        }

        self.refresh_expiry();

        if self.store.get_token().is_none() {
            debug!("Token expired, ending session");
            self.authenticated = false;
            self.user = None;
        }
    }

    fn refresh_expiry(&mut self) {
        self.expiring_soon = self.store.is_expiring_soon();
        self.time_until_expiry = self.store.time_until_expiry();
    }

    /// Clear the error surface only; no state transition.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_expiring_soon(&self) -> bool {
        self.expiring_soon
    }

    pub fn time_until_expiry(&self) -> i64 {
        self.time_until_expiry
    }
}
