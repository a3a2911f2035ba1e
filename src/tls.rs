use serde::{Deserialize, Serialize};

/// Summary of the TLS connection a request was received over.
///
/// The live TLS session itself cannot be serialized; this captures the
/// negotiated facts a replayed or inspected request cares about.
/// Certificates are stored as raw DER bytes, implementation agnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsSummary {
    /// Negotiated protocol version, e.g. `TLS 1.3`.
    pub version: String,
    /// IANA cipher suite identifier.
    pub cipher_suite: u16,
    /// ALPN-negotiated application protocol, e.g. `h2`.
    pub negotiated_protocol: String,
    /// SNI server name offered by the client.
    pub server_name: String,
    pub handshake_complete: bool,
    /// Peer certificate chain, leaf first, DER encoded.
    pub peer_certificates_der: Vec<Vec<u8>>,
}

impl TlsSummary {
    /// Whether every field equals the canonical zero value.
    ///
    /// A zero-valued summary is treated as "no TLS" when a request is
    /// restored from a snapshot.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Self::default()
    }
}
