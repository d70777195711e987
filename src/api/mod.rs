//! REST API client module for the Haven Communities backend.
//!
//! This module provides the `ApiClient` for the property catalog, blog,
//! lead-capture, and admin endpoints.
//!
//! Admin endpoints use bearer-token authentication; the token is read from
//! the shared `TokenStore` on every request, and a 401 from any endpoint
//! clears it.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{error_message, ApiError};
