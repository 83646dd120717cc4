//! Helpers for parsing JSON request bodies.
//!
//! The API promises fixed error messages for empty and malformed bodies, so
//! handlers take the raw bytes and parse through this module instead of
//! using the `Json` extractor and its rejections.

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::Error;

/// Parses `body` as JSON into `T`.
///
/// An empty body and a body that does not parse map to distinct errors so
/// that the client gets the right 400 message.
pub fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, Error> {
    if body.is_empty() {
        return Err(Error::EmptyRequestBody);
    }

    serde_json::from_slice(body).map_err(|error| Error::InvalidRequestBody(error.to_string()))
}
