use std::error::Error;
use std::fmt;
use std::io;

/// Error returned by the snapshot transforms, the binary codec
/// and the file store.
///
/// Every failure is reported to the caller; nothing is retried or
/// swallowed internally.
#[derive(Debug)]
pub enum SnapshotError {
    /// A nil live request or snapshot was passed where a value is required.
    NilInput,
    /// Reading the live request's body stream failed.
    ///
    /// The transform is aborted; no partial snapshot is returned.
    BodyRead(io::Error),
    /// Encoding a snapshot into its binary form failed.
    Encode(rmp_serde::encode::Error),
    /// Decoding a snapshot from bytes failed (malformed or truncated input).
    Decode(rmp_serde::decode::Error),
    /// A filesystem error from the snapshot store, carried verbatim.
    Io(io::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NilInput => write!(f, "received a nil request or snapshot"),
            Self::BodyRead(err) => write!(f, "failed to read request body: {err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Decode(err) => write!(f, "failed to decode snapshot: {err}"),
            Self::Io(err) => err.fmt(f),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NilInput => None,
            Self::BodyRead(err) | Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<rmp_serde::encode::Error> for SnapshotError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        Self::Encode(err)
    }
}

impl From<rmp_serde::decode::Error> for SnapshotError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        Self::Decode(err)
    }
}

impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_input_display() {
        assert_eq!(
            SnapshotError::NilInput.to_string(),
            "received a nil request or snapshot"
        );
    }

    #[test]
    fn io_display_is_verbatim() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let expected = inner.to_string();
        assert_eq!(SnapshotError::Io(inner).to_string(), expected);
    }
}
