use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::FieldMap;

/// A response embedded in a request, as seen on requests that are part
/// of a redirect chain.
///
/// Unlike the live request this is already a flat value: the body is
/// owned bytes, captured whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSnapshot {
    /// Status code, e.g. `302`.
    pub status: u16,
    /// Protocol version string, e.g. `HTTP/1.1`.
    pub proto: String,
    pub proto_major: u16,
    pub proto_minor: u16,
    pub headers: FieldMap,
    pub body: Bytes,
    /// Declared body length; `-1` when unknown.
    pub content_length: i64,
    pub transfer_encoding: Vec<String>,
    pub close: bool,
    pub trailer: FieldMap,
}

impl ResponseSnapshot {
    /// Whether every field equals the canonical zero value.
    ///
    /// A zero-valued response is treated as absent when a request is
    /// restored from a snapshot.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Self::default()
    }
}
