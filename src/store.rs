//! File store for request snapshots.
//!
//! A thin shim over the transform and codec stages: it owns the
//! byte-level file I/O and nothing else. Both operations are blocking
//! and propagate the first error encountered from any stage.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{LiveRequest, RequestSnapshot, SnapshotError, snapshot};

/// Conventional file name for a stored request snapshot.
///
/// A caller-visible default, not enforced by any of the operations.
pub const SNAPSHOT_FILE_NAME: &str = "req_bytes.txt";

/// Capture the request, encode it and write the bytes to `path`.
///
/// An existing file is overwritten; permissions are left at the
/// platform default. On success the request carries a fresh replayable
/// body, same as after [`snapshot::capture`].
pub fn write_snapshot_to_file(
    req: Option<&mut LiveRequest>,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let path = path.as_ref();

    let snapshot = snapshot::capture(req)?;
    let bytes = snapshot.to_bytes()?;
    fs::write(path, &bytes)?;

    debug!(path = %path.display(), len = bytes.len(), "wrote request snapshot");
    Ok(())
}

/// Read `path` in full, decode the snapshot and restore a request from it.
pub fn read_snapshot_from_file(path: impl AsRef<Path>) -> Result<LiveRequest, SnapshotError> {
    let path = path.as_ref();

    let bytes = fs::read(path)?;
    let snapshot = RequestSnapshot::from_bytes(&bytes)?;

    debug!(path = %path.display(), len = bytes.len(), "read request snapshot");
    snapshot::restore(Some(&snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn write_nil_request_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);
        assert!(matches!(
            write_snapshot_to_file(None, &path),
            Err(SnapshotError::NilInput)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn read_missing_file_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_snapshot_from_file(dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }

    #[test]
    fn read_corrupt_file_fails_with_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);
        fs::write(&path, b"definitely not msgpack").unwrap();
        let err = read_snapshot_from_file(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);

        let mut req = LiveRequest::new("PUT", "https://www.example.com/item", "contents")
            .with_header("X-Req-Id", "42");

        write_snapshot_to_file(Some(&mut req), &path).unwrap();
        let mut restored = read_snapshot_from_file(&path).unwrap();

        assert_eq!(restored.method, "PUT");
        assert_eq!(restored.headers.get("X-Req-Id"), Some("42"));
        assert_eq!(restored.url, req.url);

        let mut body = Vec::new();
        restored.body.read_to_end(&mut body).unwrap();
        assert_eq!(body, b"contents");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);
        fs::write(&path, b"stale").unwrap();

        let mut req = LiveRequest::new("GET", "https://www.example.com", "fresh");
        write_snapshot_to_file(Some(&mut req), &path).unwrap();

        let restored = read_snapshot_from_file(&path).unwrap();
        assert_eq!(restored.body.as_replay_bytes().map(|b| b.as_ref()), Some(&b"fresh"[..]));
    }
}
