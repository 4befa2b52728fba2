//! Response-shape tolerance for list endpoints
//!
//! The API's list endpoints return either a bare JSON array or an object
//! with a `data` array field, depending on the deployment. Both shapes must
//! decode to the same list; anything else is a data-format error.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use postdeck_core::prelude::*;

/// A list response in either accepted wire shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// A bare array: `[...]`
    Bare(Vec<T>),
    /// An object wrapping the array: `{"data": [...]}`
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    /// Unwrap into the inner list regardless of wire shape
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { data } => data,
        }
    }
}

/// Decode a list response, accepting both wire shapes
///
/// `what` names the endpoint for the error message.
///
/// # Errors
///
/// [`Error::DataFormat`] if the value is neither an array nor an object
/// exposing a `data` array field.
pub fn parse_list<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<Vec<T>> {
    serde_json::from_value::<ListEnvelope<T>>(value)
        .map(ListEnvelope::into_vec)
        .map_err(|e| Error::data_format(format!("{what}: expected an array or a data field: {e}")))
}
