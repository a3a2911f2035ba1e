use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Body, FieldMap, LiveRequest, MultipartForm, ResponseSnapshot, SnapshotError, TlsSummary,
    UrlParts,
};

/// A flat, self-contained capture of a [`LiveRequest`].
///
/// Unlike the live request, a snapshot owns all of its data: the body is
/// a byte buffer and the optional substructures (URL, multipart form,
/// TLS summary, embedded response) are stored as always-present values.
/// A substructure equal to its zero value stands for "absent"; this is
/// lossy on purpose — a legitimately all-zero substructure cannot be
/// told apart from a missing one.
///
/// A snapshot has no ties to the request it was captured from and no
/// identity beyond its serialized bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestSnapshot {
    pub method: String,
    pub url: UrlParts,
    pub proto: String,
    pub proto_major: u16,
    pub proto_minor: u16,
    pub headers: FieldMap,
    pub body_bytes: Bytes,
    pub content_length: i64,
    pub transfer_encoding: Vec<String>,
    pub close: bool,
    pub host: String,
    pub form: FieldMap,
    pub post_form: FieldMap,
    pub multipart_form: MultipartForm,
    pub trailer: FieldMap,
    pub remote_addr: String,
    /// Present for layout parity only: the snapshot transform never
    /// copies `request_uri` in either direction.
    pub request_uri: String,
    pub tls: TlsSummary,
    pub response: ResponseSnapshot,
}

/// Capture a [`LiveRequest`] into a [`RequestSnapshot`].
///
/// The request's body stream is read to completion — the one observable
/// side effect: afterwards the request carries a fresh replayable body
/// over the same bytes, so it remains fully usable. A body read error
/// aborts the capture with [`SnapshotError::BodyRead`] and no snapshot
/// is returned.
///
/// `None` input fails with [`SnapshotError::NilInput`].
pub fn capture(req: Option<&mut LiveRequest>) -> Result<RequestSnapshot, SnapshotError> {
    let Some(req) = req else {
        debug!("capture: received a nil live request");
        return Err(SnapshotError::NilInput);
    };

    let mut snapshot = RequestSnapshot {
        method: req.method.clone(),
        proto: req.proto.clone(),
        proto_major: req.proto_major,
        proto_minor: req.proto_minor,
        headers: req.headers.clone(),
        content_length: req.content_length,
        transfer_encoding: req.transfer_encoding.clone(),
        close: req.close,
        host: req.host.clone(),
        form: req.form.clone(),
        post_form: req.post_form.clone(),
        trailer: req.trailer.clone(),
        remote_addr: req.remote_addr.clone(),
        // request_uri: connection metadata, not part of the round-trip
        ..Default::default()
    };

    if let Some(url) = &req.url {
        snapshot.url = url.clone();
    }
    if let Some(form) = &req.multipart_form {
        snapshot.multipart_form = form.clone();
    }
    if let Some(tls) = &req.tls {
        snapshot.tls = tls.clone();
    }
    if let Some(response) = &req.response {
        snapshot.response = response.clone();
    }

    let body_bytes = req.body.drain().map_err(SnapshotError::BodyRead)?;
    // draining consumed the stream; hand the request a replayable copy
    req.body = Body::replay(body_bytes.clone());
    snapshot.body_bytes = body_bytes;

    trace!(
        method = %snapshot.method,
        body_len = snapshot.body_bytes.len(),
        "captured request snapshot"
    );

    Ok(snapshot)
}

/// Rebuild a [`LiveRequest`] from a [`RequestSnapshot`].
///
/// Each optional substructure is attached only when it differs from its
/// zero value, compared field by field. The body is always installed as
/// a replayable stream over the captured bytes — an empty capture still
/// yields a present, empty body. `request_uri` is left at its default.
///
/// `None` input fails with [`SnapshotError::NilInput`]; nothing else
/// can fail here.
pub fn restore(snapshot: Option<&RequestSnapshot>) -> Result<LiveRequest, SnapshotError> {
    let Some(snapshot) = snapshot else {
        debug!("restore: received a nil snapshot");
        return Err(SnapshotError::NilInput);
    };

    let mut req = LiveRequest {
        method: snapshot.method.clone(),
        proto: snapshot.proto.clone(),
        proto_major: snapshot.proto_major,
        proto_minor: snapshot.proto_minor,
        headers: snapshot.headers.clone(),
        content_length: snapshot.content_length,
        transfer_encoding: snapshot.transfer_encoding.clone(),
        close: snapshot.close,
        host: snapshot.host.clone(),
        form: snapshot.form.clone(),
        post_form: snapshot.post_form.clone(),
        trailer: snapshot.trailer.clone(),
        remote_addr: snapshot.remote_addr.clone(),
        // request_uri: connection metadata, not part of the round-trip
        ..Default::default()
    };

    if !snapshot.url.is_zero() {
        req.url = Some(snapshot.url.clone());
    }
    if !snapshot.multipart_form.is_zero() {
        req.multipart_form = Some(snapshot.multipart_form.clone());
    }
    if !snapshot.tls.is_zero() {
        req.tls = Some(snapshot.tls.clone());
    }
    if !snapshot.response.is_zero() {
        req.response = Some(snapshot.response.clone());
    }

    // empty bytes still produce an empty-but-present body
    req.body = Body::replay(snapshot.body_bytes.clone());

    trace!(method = %req.method, "restored request from snapshot");

    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_request() -> LiveRequest {
        let mut req = LiveRequest::new("GET", "https://www.example.com", "z=post&both=y")
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_remote_addr("192.0.2.1:50000");
        req.trailer.append("X-Checksum", "abc");
        req
    }

    #[test]
    fn capture_nil_fails() {
        assert!(matches!(capture(None), Err(SnapshotError::NilInput)));
    }

    #[test]
    fn restore_nil_fails() {
        assert!(matches!(restore(None), Err(SnapshotError::NilInput)));
    }

    #[test]
    fn capture_copies_every_field() {
        let mut req = sample_request();
        let snapshot = capture(Some(&mut req)).unwrap();

        assert_eq!(snapshot.method, "GET");
        assert_eq!(snapshot.proto, "HTTP/1.1");
        assert_eq!((snapshot.proto_major, snapshot.proto_minor), (1, 1));
        assert_eq!(snapshot.host, "www.example.com");
        assert_eq!(snapshot.remote_addr, "192.0.2.1:50000");
        assert_eq!(snapshot.headers, req.headers);
        assert_eq!(snapshot.trailer, req.trailer);
        assert_eq!(snapshot.body_bytes, Bytes::from_static(b"z=post&both=y"));
        assert_eq!(snapshot.url.host, "www.example.com");
        // absent substructures stay at their zero value
        assert!(snapshot.tls.is_zero());
        assert!(snapshot.multipart_form.is_zero());
        assert!(snapshot.response.is_zero());
    }

    #[test]
    fn capture_rewinds_the_body() {
        let mut req = sample_request();
        let _ = capture(Some(&mut req)).unwrap();

        // the request's body must be readable again after the capture
        let mut replayed = Vec::new();
        req.body.read_to_end(&mut replayed).unwrap();
        assert_eq!(replayed, b"z=post&both=y");
    }

    #[test]
    fn capture_reads_stream_bodies() {
        let mut req = LiveRequest::new(
            "POST",
            "https://www.example.com/upload",
            Body::from_reader(std::io::Cursor::new(b"streamed".to_vec())),
        );
        let snapshot = capture(Some(&mut req)).unwrap();
        assert_eq!(snapshot.body_bytes, Bytes::from_static(b"streamed"));
        assert_eq!(req.body.as_replay_bytes(), Some(&snapshot.body_bytes));
    }

    #[test]
    fn capture_body_error_aborts() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let mut req = LiveRequest::new("POST", "https://www.example.com", Body::from_reader(FailingReader));
        assert!(matches!(
            capture(Some(&mut req)),
            Err(SnapshotError::BodyRead(_))
        ));
    }

    #[test]
    fn capture_skips_request_uri() {
        let mut req = sample_request();
        req.request_uri = "/raw-target".to_owned();
        let snapshot = capture(Some(&mut req)).unwrap();
        assert_eq!(snapshot.request_uri, "");
    }

    #[test]
    fn restore_attaches_present_substructures() {
        let mut req = sample_request().with_tls(TlsSummary {
            version: "TLS 1.3".to_owned(),
            server_name: "www.example.com".to_owned(),
            handshake_complete: true,
            ..Default::default()
        });
        let snapshot = capture(Some(&mut req)).unwrap();
        let restored = restore(Some(&snapshot)).unwrap();

        assert_eq!(restored.url, req.url);
        assert_eq!(restored.tls, req.tls);
        assert!(restored.multipart_form.is_none());
        assert!(restored.response.is_none());
    }

    #[test]
    fn restore_leaves_zero_substructures_absent() {
        let snapshot = RequestSnapshot {
            method: "GET".to_owned(),
            ..Default::default()
        };
        let restored = restore(Some(&snapshot)).unwrap();
        assert!(restored.url.is_none());
        assert!(restored.tls.is_none());
        assert!(restored.multipart_form.is_none());
        assert!(restored.response.is_none());
    }

    #[test]
    fn restore_installs_empty_but_present_body() {
        let restored = restore(Some(&RequestSnapshot::default())).unwrap();
        assert_eq!(restored.body.as_replay_bytes(), Some(&Bytes::new()));
    }

    #[test]
    fn roundtrip_preserves_fields() {
        let mut req = sample_request();
        let original_body = req.body.as_replay_bytes().cloned().unwrap();

        let snapshot = capture(Some(&mut req)).unwrap();
        let mut restored = restore(Some(&snapshot)).unwrap();

        assert_eq!(restored.method, req.method);
        assert_eq!(restored.proto, req.proto);
        assert_eq!(restored.headers, req.headers);
        assert_eq!(restored.trailer, req.trailer);
        assert_eq!(restored.form, req.form);
        assert_eq!(restored.post_form, req.post_form);
        assert_eq!(restored.content_length, req.content_length);
        assert_eq!(restored.close, req.close);
        assert_eq!(restored.host, req.host);
        assert_eq!(restored.remote_addr, req.remote_addr);
        assert_eq!(restored.url, req.url);

        let mut replayed = Vec::new();
        restored.body.read_to_end(&mut replayed).unwrap();
        assert_eq!(replayed, original_body);
    }
}
