use crate::{Body, FieldMap, MultipartForm, ResponseSnapshot, TlsSummary, UrlParts};

/// The runtime request object: a request as received by a server or
/// constructed by a client, before it is flattened into a
/// [`RequestSnapshot`].
///
/// The body is a one-shot byte source; the snapshot transform drains it
/// and installs a fresh replayable body in its place, so the request
/// stays usable afterwards. Every other field is plain owned data.
///
/// `request_uri` is connection metadata and is deliberately excluded
/// from the snapshot round-trip in both directions.
///
/// [`RequestSnapshot`]: crate::RequestSnapshot
#[derive(Debug, Default)]
pub struct LiveRequest {
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Protocol version string, e.g. `HTTP/1.1`.
    pub proto: String,
    pub proto_major: u16,
    pub proto_minor: u16,
    pub headers: FieldMap,
    pub body: Body,
    /// Declared body length; `-1` when unknown.
    pub content_length: i64,
    /// Transfer codings, outermost first.
    pub transfer_encoding: Vec<String>,
    /// Whether the connection is to be closed after this request.
    pub close: bool,
    pub host: String,
    /// Parsed form values, query string included.
    pub form: FieldMap,
    /// Parsed form values from the request body only.
    pub post_form: FieldMap,
    pub multipart_form: Option<MultipartForm>,
    pub trailer: FieldMap,
    /// Network address of the peer, e.g. `192.0.2.1:54321`.
    pub remote_addr: String,
    /// Request target as sent on the wire. Never captured nor restored.
    pub request_uri: String,
    pub url: Option<UrlParts>,
    /// Summary of the TLS connection the request arrived over, if any.
    pub tls: Option<TlsSummary>,
    /// Response this request is a follow-up to, for redirect chains.
    pub response: Option<ResponseSnapshot>,
}

impl LiveRequest {
    /// Create an HTTP/1.1 request for the given method, URL and body.
    ///
    /// The URL is split leniently into [`UrlParts`]; the host and the
    /// content length (when the body size is known upfront) are filled
    /// in from it. All remaining fields start at their defaults.
    #[must_use]
    pub fn new(method: impl Into<String>, url: &str, body: impl Into<Body>) -> Self {
        let url = UrlParts::parse(url);
        let body = body.into();
        let content_length = body.len_hint().map_or(-1, |len| len as i64);

        Self {
            method: method.into(),
            proto: "HTTP/1.1".to_owned(),
            proto_major: 1,
            proto_minor: 1,
            host: url.host.clone(),
            url: (!url.is_zero()).then_some(url),
            body,
            content_length,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    #[must_use]
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = addr.into();
        self
    }

    #[must_use]
    pub fn with_tls(mut self, tls: TlsSummary) -> Self {
        self.tls = Some(tls);
        self
    }

    #[must_use]
    pub fn with_multipart_form(mut self, form: MultipartForm) -> Self {
        self.multipart_form = Some(form);
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: ResponseSnapshot) -> Self {
        self.response = Some(response);
        self
    }
}
