use std::io::{self, Read};

use crate::kind::{self, Kind};
use crate::{Accessor, Error, Result};

/// Defines the per-kind `read_*` shorthands.
macro_rules! read_kinds {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads a `", stringify!($ty), "` in the configured byte order.")]
            #[inline(always)]
            pub fn $name(&mut self) -> Result<$ty> {
                self.read::<$ty>()
            }
        )*
    };
}

impl<S: Read + ?Sized> Accessor<'_, S> {
    /// Fills `buf` from the stream. Unlike `Read::read_exact`, a short stream reports how many
    /// bytes were actually available.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(Error::TruncatedRead {
                        expected: buf.len(),
                        actual: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Reads one value of kind `T`, consuming exactly `T::WIDTH` bytes.
    ///
    /// Fails with [`Error::TruncatedRead`] if the stream ends first. In that case the bytes
    /// that were available have been consumed.
    pub fn read<T: Kind>(&mut self) -> Result<T> {
        let mut buf = [0u8; 8];
        let bytes = &mut buf[..T::WIDTH];
        self.fill(bytes)?;
        Ok(kind::decode(self.config.byte_order, bytes))
    }

    read_kinds! {
        read_u8 => u8,
        read_u16 => u16,
        read_u32 => u32,
        read_u64 => u64,
        read_i8 => i8,
        read_i16 => i16,
        read_i32 => i32,
        read_i64 => i64,
        read_f32 => f32,
        read_f64 => f64,
    }

    /// Reads `count` consecutive values of kind `T`.
    ///
    /// Fails with [`Error::ValueOutOfRange`] without reading anything if `count` values of `T`
    /// would not fit in memory, and with [`Error::TruncatedRead`] if the stream ends first.
    pub fn read_array<T: Kind>(&mut self, count: usize) -> Result<Vec<T>> {
        let Some(len) = count.checked_mul(T::WIDTH) else {
            return Err(Error::ValueOutOfRange { kind: "usize" });
        };
        let bytes = self.read_raw(len)?;
        Ok(kind::decode_slice(self.config.byte_order, &bytes))
    }

    /// Reads exactly `len` bytes and returns them unchanged.
    ///
    /// The buffer grows as data arrives, so a `len` larger than the stream only costs what the
    /// stream actually holds before failing with [`Error::TruncatedRead`].
    pub fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let limit = u64::try_from(len).unwrap_or(u64::MAX);
        let mut bytes = Vec::new();
        (&mut *self.stream).take(limit).read_to_end(&mut bytes)?;
        if bytes.len() < len {
            return Err(Error::TruncatedRead {
                expected: len,
                actual: bytes.len(),
            });
        }
        Ok(bytes)
    }

    /// Reads exactly `len` bytes and returns them as a `bstr::BString`. The bytes are not
    /// checked for any encoding; this is mostly useful for `Debug` output of binary data.
    #[cfg(feature = "bstr")]
    pub fn read_raw_bstr(&mut self, len: usize) -> Result<bstr::BString> {
        Ok(bstr::BString::from(self.read_raw(len)?))
    }

    /// Reads a fixed-length ASCII string of `len` bytes.
    ///
    /// Embedded NUL bytes are kept as `'\0'` characters; use [`trim_nul`] to cut the string at
    /// the first one. Any byte with the high bit set fails with [`Error::InvalidEncoding`].
    pub fn read_ascii(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_raw(len)?;
        if let Some(index) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(Error::InvalidEncoding {
                byte: bytes[index],
                index,
            });
        }
        Ok(bytes.into_iter().map(char::from).collect())
    }

    /// Reads a NUL-terminated ASCII string. The terminator is consumed but not returned.
    ///
    /// Bytes are read one at a time, so the stream is left just past the terminator. Fails with
    /// [`Error::TruncatedRead`] if the stream ends before a terminator, and with
    /// [`Error::InvalidEncoding`] as soon as a non-ASCII byte is read.
    pub fn read_asciiz(&mut self) -> Result<String> {
        let mut s = String::new();
        loop {
            let mut b = [0u8; 1];
            self.fill(&mut b).map_err(|e| match e {
                Error::TruncatedRead { .. } => Error::TruncatedRead {
                    expected: s.len() + 1,
                    actual: s.len(),
                },
                e => e,
            })?;

            match b[0] {
                0 => return Ok(s),
                byte if byte.is_ascii() => s.push(char::from(byte)),
                byte => {
                    return Err(Error::InvalidEncoding {
                        byte,
                        index: s.len(),
                    })
                }
            }
        }
    }
}

/// Cuts `s` at its first NUL character, if any.
///
/// [`Accessor::read_ascii`] keeps embedded NULs; this is the step for fixed-size fields that are
/// NUL-padded.
///
/// ```
/// assert_eq!(binstream_io::trim_nul("abc\0\0\0"), "abc");
/// assert_eq!(binstream_io::trim_nul("abc"), "abc");
/// ```
pub fn trim_nul(s: &str) -> &str {
    match s.find('\0') {
        Some(end) => &s[..end],
        None => s,
    }
}
