//! Error handling for gw2link.
//!
//! - [`NetworkError`]: HTTP and API failures, classified from reqwest errors
//! - [`LinkError`]: unified error wrapping the codec, network, platform and
//!   icon errors, with short codes for logs and user-facing messages
//! - [`LinkResult<T>`]: result alias
//!
//! The UI never fails on these errors: decode failures mark the input invalid
//! and fetch failures leave labels blank.

mod link_error;
mod network;

pub use link_error::{LinkError, LinkResult};
pub use network::{classify_reqwest_error, NetworkError};
