use std::io::{Seek, SeekFrom};

use crate::{ByteOrder, Config, Error, Result};

/// Reads and writes fixed-width binary values on a borrowed stream.
///
/// The accessor does not own the stream. It never opens, flushes or closes it, and it keeps no
/// copy of the stream position: every operation goes straight to the stream, so it is fine to
/// mix accessor calls with direct use of the stream (see [`Accessor::get_mut`]).
///
/// Which operations are available depends on the stream. The `read_*` methods need
/// [`std::io::Read`], the `write_*` methods need [`std::io::Write`], and [`Accessor::skip`] and
/// [`Accessor::position`] need [`std::io::Seek`].
///
/// ```
/// use binstream_io::Accessor;
/// use std::io::Cursor;
///
/// let mut cursor = Cursor::new(vec![0x34, 0x12, b'h', b'i', 0]);
/// let mut a = Accessor::new(&mut cursor, true);
/// assert_eq!(a.read_u16().unwrap(), 0x1234);
/// assert_eq!(a.read_asciiz().unwrap(), "hi");
/// ```
pub struct Accessor<'a, S: ?Sized> {
    pub(crate) stream: &'a mut S,
    pub(crate) config: Config,
}

impl<'a, S: ?Sized> Accessor<'a, S> {
    /// Wraps `stream`, using little-endian byte order if `little_endian` is true and big-endian
    /// otherwise. Does not read or write anything.
    pub fn new(stream: &'a mut S, little_endian: bool) -> Self {
        Self::with_byte_order(stream, ByteOrder::from_little_endian(little_endian))
    }

    /// Wraps `stream` with the given byte order.
    pub fn with_byte_order(stream: &'a mut S, byte_order: ByteOrder) -> Self {
        Self::with_config(stream, Config::new().byte_order(byte_order))
    }

    /// Wraps `stream` with the given settings.
    pub fn with_config(stream: &'a mut S, config: Config) -> Self {
        Self { stream, config }
    }

    /// The byte order chosen at construction.
    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    /// The settings chosen at construction.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accesses the underlying stream
    pub fn get_ref(&self) -> &S {
        &*self.stream
    }

    /// Accesses the underlying stream mutably. Seeking or reading through this reference is
    /// visible to the accessor's next operation.
    pub fn get_mut(&mut self) -> &mut S {
        &mut *self.stream
    }
}

impl<S: Seek + ?Sized> Accessor<'_, S> {
    /// Moves the stream position by `offset` bytes relative to the current position. Negative
    /// offsets move backward.
    ///
    /// This uses the stream's own seek; nothing is read or written, so it works on write-only
    /// streams and the target may lie past the current end of the stream.
    ///
    /// Fails with [`Error::NotSeekable`] if the stream cannot report its position, and with
    /// [`Error::SeekOutOfRange`] if the new position would be negative.
    pub fn skip(&mut self, offset: i64) -> Result<()> {
        let position = self.stream.stream_position().map_err(Error::NotSeekable)?;
        if position.checked_add_signed(offset).is_none() {
            return Err(Error::SeekOutOfRange { position, offset });
        }

        let new_position = self.stream.seek(SeekFrom::Current(offset))?;
        tracing::trace!(from = position, to = new_position, "skip");
        Ok(())
    }

    /// The current stream position.
    pub fn position(&mut self) -> Result<u64> {
        self.stream.stream_position().map_err(Error::NotSeekable)
    }
}
