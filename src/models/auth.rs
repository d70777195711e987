//! Authentication wire types: the admin identity and the login/verify
//! request and response envelopes exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Admin identity as returned by the backend auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AdminUser {
    /// Human-facing label for the user: the display name when present and
    /// non-empty, otherwise the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Wire payload for `POST /api/admin/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for `POST /api/admin/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    #[serde(rename = "expiresIn")]
    pub expires_in: Option<i64>,
    pub user: Option<AdminUser>,
    pub message: Option<String>,
}

/// Response body for `POST /api/admin/verify-token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenVerification {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub user: Option<AdminUser>,
}
