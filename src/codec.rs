//! Binary codec for [`RequestSnapshot`] values.
//!
//! Snapshots are encoded as MessagePack with named fields: the payload
//! is self-describing, so the decoder only needs the shared structure
//! definition, not the field order. The encoding is internal — the only
//! guarantee is that the same crate version reads what it wrote.

use tracing::trace;

use crate::{RequestSnapshot, SnapshotError};

/// Serialize a snapshot into its binary form.
pub fn encode(snapshot: &RequestSnapshot) -> Result<Vec<u8>, SnapshotError> {
    let bytes = rmp_serde::to_vec_named(snapshot)?;
    trace!(len = bytes.len(), "encoded request snapshot");
    Ok(bytes)
}

/// Deserialize a snapshot from its binary form.
///
/// Malformed or truncated input fails with [`SnapshotError::Decode`];
/// decoding is always recoverable.
pub fn decode(bytes: &[u8]) -> Result<RequestSnapshot, SnapshotError> {
    let snapshot = rmp_serde::from_slice(bytes)?;
    Ok(snapshot)
}

impl RequestSnapshot {
    /// Serialize this snapshot into its binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode(self)
    }

    /// Deserialize a snapshot from its binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode(bytes)
    }
}
