/// The order in which the bytes of a multi-byte value are stored.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// Maps a `little_endian` flag to a byte order.
    pub fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Returns `true` for [`ByteOrder::Little`].
    pub fn is_little(self) -> bool {
        self == Self::Little
    }
}
