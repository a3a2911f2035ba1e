use std::fmt;
use std::io::{self, Read};

use bytes::Bytes;

/// Synchronous byte source backing a [`LiveRequest`].
///
/// A body is either a *replay* body over owned bytes, which can be
/// reinstalled and read again at will, or a one-shot *stream* body that
/// can be read to completion exactly once. [`Body::drain`] converts
/// either into owned bytes; the snapshot transform uses it to capture
/// the payload and then puts a fresh replay body back in place.
///
/// An empty body is a present body with zero bytes, it is never
/// treated as absent.
///
/// [`LiveRequest`]: crate::LiveRequest
pub struct Body {
    kind: BodyKind,
}

enum BodyKind {
    Replay { bytes: Bytes, pos: usize },
    Stream(Box<dyn Read + Send + 'static>),
}

impl Body {
    /// A present body with zero bytes.
    #[must_use]
    pub fn empty() -> Self {
        Self::replay(Bytes::new())
    }

    /// A replayable body over the given owned bytes.
    #[must_use]
    pub fn replay(bytes: impl Into<Bytes>) -> Self {
        Self {
            kind: BodyKind::Replay {
                bytes: bytes.into(),
                pos: 0,
            },
        }
    }

    /// A one-shot stream body.
    ///
    /// The reader is consumed the first time the body is drained or read;
    /// there is no rewinding a stream body.
    #[must_use]
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self {
            kind: BodyKind::Stream(Box::new(reader)),
        }
    }

    /// Read the remaining payload to completion, leaving this body empty.
    ///
    /// For a replay body this returns the not-yet-read tail without copying.
    /// For a stream body this performs the one allowed full read; any
    /// underlying read error is returned as-is and the stream is not
    /// restored.
    pub fn drain(&mut self) -> io::Result<Bytes> {
        match &mut self.kind {
            BodyKind::Replay { bytes, pos } => {
                let tail = bytes.slice(*pos..);
                *pos = bytes.len();
                Ok(tail)
            }
            BodyKind::Stream(reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                self.kind = BodyKind::Replay {
                    bytes: Bytes::new(),
                    pos: 0,
                };
                Ok(buf.into())
            }
        }
    }

    /// The full captured bytes backing this body, if it is a replay body.
    #[must_use]
    pub fn as_replay_bytes(&self) -> Option<&Bytes> {
        match &self.kind {
            BodyKind::Replay { bytes, .. } => Some(bytes),
            BodyKind::Stream(_) => None,
        }
    }

    /// The number of bytes this body will yield, if known upfront.
    ///
    /// Known for replay bodies only; a stream body reports `None`.
    #[must_use]
    pub fn len_hint(&self) -> Option<u64> {
        match &self.kind {
            BodyKind::Replay { bytes, pos } => Some((bytes.len() - *pos) as u64),
            BodyKind::Stream(_) => None,
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.kind {
            BodyKind::Replay { bytes, pos } => {
                let remaining = &bytes[*pos..];
                let n = remaining.len().min(buf.len());
                buf[..n].copy_from_slice(&remaining[..n]);
                *pos += n;
                Ok(n)
            }
            BodyKind::Stream(reader) => reader.read(buf),
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BodyKind::Replay { bytes, pos } => f
                .debug_struct("Body")
                .field("kind", &"replay")
                .field("len", &bytes.len())
                .field("pos", pos)
                .finish(),
            BodyKind::Stream(_) => f
                .debug_struct("Body")
                .field("kind", &"stream")
                .finish_non_exhaustive(),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::replay(bytes)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::replay(bytes)
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Self::replay(s.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Self::replay(s.as_bytes().to_vec())
    }
}
