use std::io;

/// Result type for [`Accessor`](crate::Accessor) operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for [`Accessor`](crate::Accessor).
///
/// None of the operations roll back partial effects. If an operation fails, the stream position
/// is wherever the underlying stream left it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stream could not report or change its position, so `skip` cannot work on it.
    #[error("the stream does not support seeking")]
    NotSeekable(#[source] io::Error),

    /// The stream ended before the operation could read all of the bytes it needs.
    #[error("truncated read: expected {expected} bytes, found {actual}")]
    TruncatedRead {
        /// Number of bytes the operation required.
        expected: usize,
        /// Number of bytes that were actually available.
        actual: usize,
    },

    /// A byte or character outside of 7-bit ASCII was found where ASCII is required.
    #[error("non-ASCII byte 0x{byte:02x} at index {index}")]
    InvalidEncoding {
        /// The offending byte. For a string being written, this is the first byte of the
        /// offending character's UTF-8 encoding.
        byte: u8,
        /// Byte index of the offending byte within the string.
        index: usize,
    },

    /// A value passed to a `write_*` method does not fit in the target kind, or the byte length
    /// of a `read_array` request does not fit in `usize`.
    #[error("value does not fit in {kind}")]
    ValueOutOfRange {
        /// Name of the target kind, e.g. `"u8"`, or `"usize"` for an oversized `read_array`.
        kind: &'static str,
    },

    /// `skip` would move the stream position before the start of the stream (or past `u64::MAX`).
    #[error("cannot skip {offset} bytes from position {position}")]
    SeekOutOfRange {
        /// Stream position before the skip.
        position: u64,
        /// The requested relative offset.
        offset: i64,
    },

    /// Any other failure of the underlying stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Classifies an [`Error`] without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum ErrorKind {
    /// The operation cannot be performed on this stream.
    InvalidArgument,
    /// Fewer bytes were available than the operation requires.
    TruncatedRead,
    /// Non-ASCII data where ASCII is required.
    InvalidEncoding,
    /// A value does not fit the target kind's width or signedness.
    ValueOutOfRange,
    /// A seek target is out of range.
    OutOfRange,
    /// The underlying stream failed.
    Io,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSeekable(_) => ErrorKind::InvalidArgument,
            Self::TruncatedRead { .. } => ErrorKind::TruncatedRead,
            Self::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            Self::ValueOutOfRange { .. } => ErrorKind::ValueOutOfRange,
            Self::SeekOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
