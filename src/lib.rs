//! Snapshot http requests into a self-contained binary form,
//! for replay and inspection outside the original connection's lifetime.
//!
//! A [`LiveRequest`] is connection-bound: its body is a one-shot byte
//! stream and it may carry state (TLS session summary, remote address)
//! that cannot be serialized by reference. [`snapshot::capture`] flattens
//! it into a [`RequestSnapshot`] — an owned value with no ties to the
//! original — and [`snapshot::restore`] turns a snapshot back into an
//! equivalent request. The [`codec`] module serializes snapshots to a
//! self-describing binary form, and the [`store`] module wraps the whole
//! pipeline in a pair of file operations.
//!
//! Capturing has one observable side effect: the request's body stream
//! is consumed and replaced by a fresh replayable body over the same
//! bytes, so the request stays usable afterwards.
//!
//! ```
//! use reqsnap::{LiveRequest, snapshot};
//!
//! # fn main() -> Result<(), reqsnap::SnapshotError> {
//! let mut req = LiveRequest::new("GET", "https://www.example.com", "z=post&both=y")
//!     .with_header("Content-Type", "application/x-www-form-urlencoded");
//!
//! let captured = snapshot::capture(Some(&mut req))?;
//! let bytes = captured.to_bytes()?;
//!
//! let restored = snapshot::restore(Some(&reqsnap::RequestSnapshot::from_bytes(&bytes)?))?;
//! assert_eq!(restored.method, req.method);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod body;
pub use body::Body;

mod error;
pub use error::SnapshotError;

mod fields;
pub use fields::FieldMap;

mod multipart;
pub use multipart::{MultipartFile, MultipartForm};

mod request;
pub use request::LiveRequest;

mod response;
pub use response::ResponseSnapshot;

mod tls;
pub use tls::TlsSummary;

mod uri;
pub use uri::UrlParts;

pub mod codec;
pub mod store;

pub mod snapshot;
pub use snapshot::RequestSnapshot;
