//! Authentication module: persisted token state and the session controller.
//!
//! This module provides:
//! - `TokenStore`: durable bearer-token storage with lazy expiry
//! - `SessionManager`: login, logout, startup verification, expiry polling
//! - `CredentialStore`: optional OS-level password storage via keyring

pub mod credentials;
pub mod session;
pub mod token;

pub use credentials::CredentialStore;
pub use session::{SessionManager, POLL_INTERVAL_SECS};
pub use token::{TokenStore, DEFAULT_TOKEN_TTL_SECS};
