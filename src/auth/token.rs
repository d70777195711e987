//! Persisted bearer-token storage with lazy expiry.
//!
//! The token and its absolute expiry live in a single JSON document under
//! the cache directory; they are always written and removed together, so a
//! reader can never observe a token without an expiry or vice versa.
//! Validity is only enforced when the token is read - there is no
//! background deletion.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Token document file name in the cache directory
const TOKEN_FILE: &str = "token.json";

/// Default token lifetime granted by the backend (1 hour).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Warning window before expiry (5 minutes).
const EXPIRY_WARNING_SECS: i64 = 5 * 60;

/// Persisted document. The expiry is epoch milliseconds kept as a decimal
/// string on disk; an unparsable value is treated the same as an expired one.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenRecord {
    token: String,
    #[serde(rename = "expiresAt")]
    expires_at: String,
}

impl TokenRecord {
    fn expires_at_ms(&self) -> Option<i64> {
        self.expires_at.trim().parse().ok()
    }
}

/// Sole authority for persisted token state. No operation here fails:
/// missing, unreadable, or corrupt storage degrades to "no token", and
/// write failures are logged and swallowed.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_FILE),
        }
    }

    /// Store a token with its lifetime in seconds. Overwrites any prior
    /// token unconditionally; the token contents are opaque and unvalidated.
    pub fn set_token(&self, token: &str, expires_in_secs: i64) {
        self.set_token_at(token, expires_in_secs, Utc::now());
    }

    fn set_token_at(&self, token: &str, expires_in_secs: i64, now: DateTime<Utc>) {
        let expires_at = now.timestamp_millis() + expires_in_secs * 1000;
        let record = TokenRecord {
            token: token.to_string(),
            expires_at: expires_at.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(error = %e, "Failed to create token directory");
                return;
            }
        }
        match serde_json::to_string_pretty(&record) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(&self.path, contents) {
                    warn!(error = %e, "Failed to write token file");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize token record"),
        }
    }

    /// Get the token if present and not expired. An expired record is
    /// cleared as a side effect of the read.
    pub fn get_token(&self) -> Option<String> {
        self.get_token_at(Utc::now())
    }

    fn get_token_at(&self, now: DateTime<Utc>) -> Option<String> {
        let record = self.read_record()?;
        let expires_at = match record.expires_at_ms() {
            Some(ms) => ms,
            None => {
                self.clear();
                return None;
            }
        };

        if now.timestamp_millis() > expires_at {
            debug!("Stored token is expired, clearing");
            self.clear();
            return None;
        }

        Some(record.token)
    }

    /// Check if a token exists and is valid.
    pub fn has_valid_token(&self) -> bool {
        self.get_token().is_some()
    }

    /// True when a stored expiry is inside the 5-minute warning window.
    /// An already-expired token also reports true - validity is a separate
    /// check, and callers must make both.
    pub fn is_expiring_soon(&self) -> bool {
        self.is_expiring_soon_at(Utc::now())
    }

    fn is_expiring_soon_at(&self, now: DateTime<Utc>) -> bool {
        match self.read_record().and_then(|r| r.expires_at_ms()) {
            Some(expires_at) => now.timestamp_millis() > expires_at - EXPIRY_WARNING_SECS * 1000,
            None => false,
        }
    }

    /// Whole seconds remaining until expiry, floored at zero. Zero when
    /// nothing is stored.
    pub fn time_until_expiry(&self) -> i64 {
        self.time_until_expiry_at(Utc::now())
    }

    fn time_until_expiry_at(&self, now: DateTime<Utc>) -> i64 {
        match self.read_record().and_then(|r| r.expires_at_ms()) {
            Some(expires_at) => ((expires_at - now.timestamp_millis()) / 1000).max(0),
            None => 0,
        }
    }

    /// Remove the token document. Both fields go together.
    pub fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(error = %e, "Failed to remove token file"),
        }
    }

    /// Stored token with no expiry check. Distinguishes "never logged in"
    /// from "token expired"; never used for authorization decisions.
    pub fn raw_token(&self) -> Option<String> {
        self.read_record().map(|r| r.token)
    }

    fn read_record(&self) -> Option<TokenRecord> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                debug!(error = %e, "Failed to read token file");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "Corrupt token file, treating as absent");
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
