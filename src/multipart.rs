use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::FieldMap;

/// Parsed multipart form data attached to a request.
///
/// Files are carried fully in memory; a snapshot has no access to the
/// temporary files a streaming parser may have spilled to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipartForm {
    /// Non-file form values.
    pub values: FieldMap,
    /// Uploaded file parts, in the order they appeared.
    pub files: Vec<MultipartFile>,
}

impl MultipartForm {
    /// Whether every field equals the canonical zero value.
    ///
    /// A zero-valued form is treated as absent when a request is
    /// restored from a snapshot.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Self::default()
    }
}

/// A single file part of a [`MultipartForm`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultipartFile {
    /// Form field name the file was submitted under.
    pub field_name: String,
    /// File name as sent by the client.
    pub file_name: String,
    /// Part headers, e.g. `Content-Type`.
    pub headers: FieldMap,
    pub content: Bytes,
}
