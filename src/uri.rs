use serde::{Deserialize, Serialize};

/// The broken-down parts of a request URL, stored as plain values
/// so they can be captured and restored without any connection state.
///
/// No validation or percent-decoding is applied; the parts hold
/// whatever the request carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    pub scheme: String,
    pub userinfo: String,
    pub host: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Split a URL string into its parts, leniently.
    ///
    /// Unrecognized shapes degrade gracefully: input without a
    /// `scheme://` prefix is treated as path (+ query/fragment).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut parts = Self::default();

        let s = match s.split_once('#') {
            Some((rest, fragment)) => {
                parts.fragment = fragment.to_owned();
                rest
            }
            None => s,
        };

        let rest = match s.split_once("://") {
            Some((scheme, rest)) => {
                parts.scheme = scheme.to_owned();
                let authority_end = rest
                    .find(['/', '?'])
                    .unwrap_or(rest.len());
                let authority = &rest[..authority_end];
                match authority.rsplit_once('@') {
                    Some((userinfo, host)) => {
                        parts.userinfo = userinfo.to_owned();
                        parts.host = host.to_owned();
                    }
                    None => parts.host = authority.to_owned(),
                }
                &rest[authority_end..]
            }
            None => s,
        };

        match rest.split_once('?') {
            Some((path, query)) => {
                parts.path = path.to_owned();
                parts.query = query.to_owned();
            }
            None => parts.path = rest.to_owned(),
        }

        parts
    }

    /// Whether every part equals the canonical zero value.
    ///
    /// A zero-valued URL is treated as absent when a request is
    /// restored from a snapshot.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Self::default()
    }
}
