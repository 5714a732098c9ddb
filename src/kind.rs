//! Descriptors for the fixed-width value kinds.
//!
//! Each kind maps onto one of the `zerocopy::byteorder` wrapper types (or onto itself, for the
//! single-byte kinds), which gives us a byte-order-aware representation that can be viewed as
//! raw bytes.

use core::fmt::Debug;
use zerocopy::byteorder::{ByteOrder as WireOrder, BE, F32, F64, I16, I32, I64, LE, U16, U32, U64};
use zerocopy::{FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::ByteOrder;

mod private {
    pub trait Sealed {}
}

/// A fixed-width value kind that an [`Accessor`](crate::Accessor) can read and write.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`, `f32` and `f64`. Signed
/// integers use two's complement; floats use IEEE-754 binary32 and binary64. This trait is sealed.
pub trait Kind: Copy + Debug + PartialEq + private::Sealed {
    /// Short name of the kind, e.g. `"u16"`. Used in errors and trace events.
    const NAME: &'static str;

    /// Encoded size in bytes.
    const WIDTH: usize;

    /// The unaligned, byte-order-aware storage for this kind.
    #[doc(hidden)]
    type Wire<O: WireOrder>: FromBytes + IntoBytes + KnownLayout + Immutable + Unaligned + Copy;

    /// Converts from the wire representation.
    #[doc(hidden)]
    fn from_wire<O: WireOrder>(wire: Self::Wire<O>) -> Self;

    /// Converts to the wire representation.
    #[doc(hidden)]
    fn to_wire<O: WireOrder>(self) -> Self::Wire<O>;
}

macro_rules! byte_kinds {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Kind for $ty {
                const NAME: &'static str = stringify!($ty);
                const WIDTH: usize = 1;

                type Wire<O: WireOrder> = $ty;

                #[inline(always)]
                fn from_wire<O: WireOrder>(wire: Self::Wire<O>) -> Self {
                    wire
                }

                #[inline(always)]
                fn to_wire<O: WireOrder>(self) -> Self::Wire<O> {
                    self
                }
            }
        )*
    };
}

macro_rules! wide_kinds {
    ($($ty:ty => $wire:ident),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Kind for $ty {
                const NAME: &'static str = stringify!($ty);
                const WIDTH: usize = core::mem::size_of::<$ty>();

                type Wire<O: WireOrder> = $wire<O>;

                #[inline(always)]
                fn from_wire<O: WireOrder>(wire: Self::Wire<O>) -> Self {
                    wire.get()
                }

                #[inline(always)]
                fn to_wire<O: WireOrder>(self) -> Self::Wire<O> {
                    $wire::new(self)
                }
            }
        )*
    };
}

byte_kinds!(u8, i8);

wide_kinds! {
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

/// Decodes one value from `bytes`, which must be `T::WIDTH` long. Extra bytes are ignored and
/// missing ones read as zero.
pub(crate) fn decode<T: Kind>(order: ByteOrder, bytes: &[u8]) -> T {
    match order {
        ByteOrder::Little => decode_as::<T, LE>(bytes),
        ByteOrder::Big => decode_as::<T, BE>(bytes),
    }
}

fn decode_as<T: Kind, O: WireOrder>(bytes: &[u8]) -> T {
    let mut wire = <T::Wire<O> as FromZeros>::new_zeroed();
    let dst = wire.as_mut_bytes();
    let n = dst.len().min(bytes.len());
    dst[..n].copy_from_slice(&bytes[..n]);
    T::from_wire(wire)
}

/// Decodes consecutive values from `bytes`. A trailing partial value is dropped.
pub(crate) fn decode_slice<T: Kind>(order: ByteOrder, bytes: &[u8]) -> Vec<T> {
    let chunks = bytes.chunks_exact(T::WIDTH);
    match order {
        ByteOrder::Little => chunks.map(decode_as::<T, LE>).collect(),
        ByteOrder::Big => chunks.map(decode_as::<T, BE>).collect(),
    }
}

/// Encodes `values` back to back.
pub(crate) fn encode<T: Kind>(order: ByteOrder, values: &[T]) -> Vec<u8> {
    match order {
        ByteOrder::Little => encode_as::<T, LE>(values),
        ByteOrder::Big => encode_as::<T, BE>(values),
    }
}

fn encode_as<T: Kind, O: WireOrder>(values: &[T]) -> Vec<u8> {
    let wires: Vec<T::Wire<O>> = values.iter().map(|&v| v.to_wire::<O>()).collect();
    wires.as_slice().as_bytes().to_vec()
}
