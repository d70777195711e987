// Allow dead code: Infrastructure methods for future use
#![allow(dead_code)]

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "haven-console";

/// OS-keychain storage for the admin password, keyed by email address.
/// Used only by the console's `login --remember` convenience; the session
/// itself never touches it.
pub struct CredentialStore;

impl CredentialStore {
    /// Store the password for an admin email in the OS keychain
    pub fn store(email: &str, password: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, email).context("Failed to create keyring entry")?;
        entry
            .set_password(password)
            .context("Failed to store password in keychain")?;
        Ok(())
    }

    /// Retrieve the saved password for an admin email, if any
    pub fn saved_password(email: &str) -> Option<String> {
        let entry = Entry::new(SERVICE_NAME, email).ok()?;
        entry.get_password().ok()
    }

    /// Delete the saved password for an admin email
    pub fn forget(email: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, email).context("Failed to create keyring entry")?;
        entry
            .delete_credential()
            .context("Failed to delete credential from keychain")?;
        Ok(())
    }
}
