//! # postdeck-api - Blog REST API client
//!
//! The wire layer for postdeck: one uniform request helper over reqwest,
//! typed wrappers for each consumed endpoint, and tolerance for the two
//! list-response shapes the API is known to produce.
//!
//! ## Public API
//!
//! - [`ApiClient`] - the HTTP client; all endpoints go through its uniform
//!   request helper
//! - [`BlogApi`] / [`LocalBlogApi`] - the service trait view-models consume;
//!   implemented by [`ApiClient`], substitutable in tests
//! - [`ListEnvelope`] - bare-array vs `{data: [...]}` tolerance

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod service;

pub use client::ApiClient;
pub use envelope::{parse_list, ListEnvelope};
pub use service::{BlogApi, LocalBlogApi};
