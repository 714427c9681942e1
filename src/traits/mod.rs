//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET used by the API client and icon loader
//! - [`Platform`] - clipboard, browser and navigation fragment integration

pub mod http;
pub mod platform;

pub use http::{Headers, HttpClient, Response};
pub use platform::{Platform, PlatformError};
