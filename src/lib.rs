//! Client library for the Haven Communities backend.
//!
//! This crate provides:
//!
//! - `auth::TokenStore`: persisted bearer-token state with lazy expiry
//! - `auth::SessionManager`: login, logout, startup verification, and the
//!   expiry-polling tick that drives auto-logout
//! - `api::ApiClient`: typed REST client for the property catalog, blog,
//!   lead capture, and admin endpoints
//!
//! The `haven` binary in this package is a thin command-line console over
//! the library.

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod models;
pub mod utils;
