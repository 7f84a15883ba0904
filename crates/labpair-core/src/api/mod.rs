//! HTTP client module for the Bottlenose course site.
//!
//! This module provides the `BottlenoseClient` for logging in with a
//! username and password and downloading a course's teamset export.

pub mod client;
pub mod error;

pub use client::{extract_csrf_token, BottlenoseClient, CsrfToken, DEFAULT_BASE_URL};
pub use error::ApiError;
