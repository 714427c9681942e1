//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemPlatform`] - clipboard via arboard, browser via `open`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::RecordingPlatform`] - Records clipboard writes, opened URLs and fragments

pub mod mock;
pub mod reqwest_http;
pub mod system_platform;

pub use mock::{MockHttpClient, MockResponse, RecordingPlatform};
pub use reqwest_http::ReqwestHttpClient;
pub use system_platform::SystemPlatform;
