//! Reads and writes fixed-width binary values on seekable streams, with selectable byte order.
//!
//! An [`Accessor`] borrows any [`std::io::Read`] / [`std::io::Write`] / [`std::io::Seek`] stream
//! and provides:
//!
//! * `read_*` / `write_*` for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32` and
//!   `f64`, plus the generic [`Accessor::read`] and [`Accessor::write`];
//! * fixed-length and NUL-terminated ASCII strings;
//! * raw bytes;
//! * relative seeking with [`Accessor::skip`].
//!
//! The byte order is chosen once, when the accessor is created. There is no header or framing of
//! any kind: callers define their own layouts by sequencing these calls.
//!
//! ```
//! use binstream_io::Accessor;
//! use std::io::{Cursor, Seek};
//!
//! let mut file = Cursor::new(Vec::new());
//! let mut w = Accessor::new(&mut file, false);
//! w.write_u16(0x1234).unwrap();
//! w.write_asciiz("hello").unwrap();
//! assert_eq!(&file.get_ref()[..2], &[0x12, 0x34]);
//!
//! file.rewind().unwrap();
//! let mut r = Accessor::new(&mut file, false);
//! assert_eq!(r.read_u16().unwrap(), 0x1234);
//! assert_eq!(r.read_asciiz().unwrap(), "hello");
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod accessor;
mod byte_order;
mod config;
mod error;
mod kind;
mod reader;
mod writer;


pub use accessor::Accessor;
pub use byte_order::ByteOrder;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use kind::Kind;
pub use reader::trim_nul;
