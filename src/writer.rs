use core::fmt::Debug;
use std::io::Write;

use crate::kind::{self, Kind};
use crate::{Accessor, Error, Result};

/// Defines the per-kind `write_*` shorthands for integer kinds. These accept any value that
/// converts into the kind, and reject the ones that do not fit.
macro_rules! write_int_kinds {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!(
                "Writes a `", stringify!($ty), "` in the configured byte order.\n\n",
                "Fails with [`Error::ValueOutOfRange`] if `value` does not fit in `",
                stringify!($ty), "`; nothing is written in that case."
            )]
            #[inline]
            pub fn $name<V: TryInto<$ty>>(&mut self, value: V) -> Result<()> {
                self.write_int::<$ty, V>(value)
            }
        )*
    };
}

impl<S: Write + ?Sized> Accessor<'_, S> {
    fn emit(&mut self, kind: &'static str, value: &dyn Debug, bytes: &[u8]) -> Result<()> {
        if self.config.trace_writes {
            tracing::debug!(kind, value = ?value, bytes = ?bytes, "write");
        }
        self.stream.write_all(bytes)?;
        Ok(())
    }

    /// Writes one value of kind `T`, producing exactly `T::WIDTH` bytes. Does not flush.
    pub fn write<T: Kind>(&mut self, value: T) -> Result<()> {
        let bytes = kind::encode(self.config.byte_order, &[value]);
        self.emit(T::NAME, &value, &bytes)
    }

    /// Converts `value` to `T`, checking the range first, then writes it.
    pub fn write_int<T: Kind, V: TryInto<T>>(&mut self, value: V) -> Result<()> {
        let value: T = value
            .try_into()
            .map_err(|_| Error::ValueOutOfRange { kind: T::NAME })?;
        self.write(value)
    }

    write_int_kinds! {
        write_u8 => u8,
        write_u16 => u16,
        write_u32 => u32,
        write_u64 => u64,
        write_i8 => i8,
        write_i16 => i16,
        write_i32 => i32,
        write_i64 => i64,
    }

    /// Writes an `f32` as IEEE-754 binary32 in the configured byte order.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write(value)
    }

    /// Writes an `f64` as IEEE-754 binary64 in the configured byte order.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write(value)
    }

    /// Writes `values` back to back, `T::WIDTH` bytes each.
    pub fn write_array<T: Kind>(&mut self, values: &[T]) -> Result<()> {
        let bytes = kind::encode(self.config.byte_order, values);
        self.emit(T::NAME, &values, &bytes)
    }

    /// Writes `bytes` verbatim.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.emit("raw", &bytes.len(), bytes)
    }

    /// Writes `s` as ASCII: exactly `s.len()` bytes, with no padding and no terminator.
    ///
    /// Fails with [`Error::InvalidEncoding`] before writing anything if `s` contains a
    /// character outside of ASCII.
    pub fn write_ascii(&mut self, s: &str) -> Result<()> {
        if let Some((index, _)) = s.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(Error::InvalidEncoding {
                byte: s.as_bytes()[index],
                index,
            });
        }
        self.emit("ascii", &s, s.as_bytes())
    }

    /// Writes `s` as ASCII followed by a single NUL byte.
    pub fn write_asciiz(&mut self, s: &str) -> Result<()> {
        self.write_ascii(s)?;
        self.write_u8(0u8)
    }
}
