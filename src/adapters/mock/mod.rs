//! Mock implementations for testing.
//!
//! These let the API client, the icon loader and the main component run
//! without network access, a display or a browser.

pub mod http;
pub mod platform;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use platform::RecordingPlatform;
