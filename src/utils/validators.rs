//! Form validation rules with user-facing messages.
//!
//! These mirror the rules enforced server-side so the console can reject
//! bad input before making a request.

use thiserror::Error;

use crate::models::ContactForm;

/// Minimum admin password length accepted by the backend.
const MIN_PASSWORD_LENGTH: usize = 6;

/// A rejected field with its user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check that a string looks like an email address: one `@` with a
/// non-empty local part and a dotted, non-empty domain.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}

/// Check an E.164-style phone number: optional `+`, then a non-zero digit
/// followed by 1 to 14 more digits.
fn is_valid_phone(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    let len = digits.len();
    (2..=15).contains(&len)
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}

/// Check a URL slug: lowercase letters, digits, and single hyphens between
/// runs, no leading or trailing hyphen.
fn is_valid_slug(s: &str) -> bool {
    !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && !s.is_empty()
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "email",
            "Please enter a valid email address",
        ))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "phone",
            "Please enter a valid phone number (e.g., +2349064937783)",
        ))
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::new("password", "Password is required"));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

pub fn validate_contact_form(form: &ContactForm) -> Result<(), ValidationError> {
    validate_name("firstName", "First name", form.first_name.trim())?;
    validate_name("lastName", "Last name", form.last_name.trim())?;
    validate_email(&form.email)?;
    validate_phone(&form.phone)?;

    let description = form.description.trim();
    if description.len() < 10 {
        return Err(ValidationError::new(
            "description",
            "Too short! Please provide at least 10 characters",
        ));
    }
    if description.len() > 1000 {
        return Err(ValidationError::new(
            "description",
            "Description cannot exceed 1000 characters",
        ));
    }
    Ok(())
}

fn validate_name(
    field: &'static str,
    label: &str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.len() < 2 {
        return Err(ValidationError::new(
            field,
            format!("{} must be at least 2 characters", label),
        ));
    }
    if value.len() > 50 {
        return Err(ValidationError::new(
            field,
            format!("{} cannot exceed 50 characters", label),
        ));
    }
    Ok(())
}

pub fn validate_subscription(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "email",
            "Please enter a valid email address. Thank you!",
        ))
    }
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if !is_valid_slug(slug) {
        return Err(ValidationError::new(
            "slug",
            "Invalid slug format. Use lowercase letters, numbers, and hyphens only",
        ));
    }
    if slug.len() < 3 {
        return Err(ValidationError::new(
            "slug",
            "Slug must be at least 3 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example")); // no dot in domain
        assert!(!is_valid_email("ada@exam ple.com")); // whitespace
        assert!(!is_valid_email("ada@example..com")); // empty label
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+2349064937783"));
        assert!(is_valid_phone("2349064937783"));
        assert!(is_valid_phone("15551234567"));

        assert!(!is_valid_phone("")); // empty
        assert!(!is_valid_phone("+0123456")); // leading zero
        assert!(!is_valid_phone("555-123-4567")); // separators
        assert!(!is_valid_phone("+12345678901234567")); // too long
        assert!(!is_valid_phone("7")); // too short
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("admin@haven.test", "secret1").is_ok());

        let err = validate_login("admin@haven.test", "short").unwrap_err();
        assert_eq!(err.field, "password");

        let err = validate_login("not-an-email", "secret1").unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_validate_contact_form() {
        let form = ContactForm {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+2348012345678".to_string(),
            description: "I would like to inspect Haven Gardens.".to_string(),
        };
        assert!(validate_contact_form(&form).is_ok());

        let short_name = ContactForm {
            first_name: "A".to_string(),
            ..form.clone()
        };
        let err = validate_contact_form(&short_name).unwrap_err();
        assert_eq!(err.field, "firstName");
        assert_eq!(err.message, "First name must be at least 2 characters");

        let short_description = ContactForm {
            description: "too short".to_string(),
            ..form
        };
        let err = validate_contact_form(&short_description).unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("why-land-banking-works").is_ok());
        assert!(validate_slug("post2026").is_ok());

        assert!(validate_slug("Bad-Slug").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("ab").is_err()); // too short
    }
}
