//! Validation rules and display formatting for the console.

pub mod format;
pub mod validators;

// Re-export commonly used functions at module level
pub use format::{format_date, format_price, truncate};
pub use validators::{
    validate_contact_form, validate_email, validate_login, validate_slug,
    validate_subscription, ValidationError,
};
