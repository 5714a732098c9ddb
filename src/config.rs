use crate::ByteOrder;

/// Settings for an [`Accessor`](crate::Accessor). These are fixed once the accessor is built.
///
/// ```
/// use binstream_io::{ByteOrder, Config};
///
/// let config = Config::new().byte_order(ByteOrder::Big).trace_writes(true);
/// assert_eq!(config.byte_order, ByteOrder::Big);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Config {
    /// Byte order used by every multi-byte numeric operation.
    pub byte_order: ByteOrder,

    /// If set, every `write_*` call emits a `tracing` event at `DEBUG` level, carrying the kind,
    /// the value and the encoded bytes. Off by default.
    pub trace_writes: bool,
}

impl Config {
    /// Little-endian, no write tracing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the byte order.
    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Enables or disables write tracing.
    pub fn trace_writes(mut self, enabled: bool) -> Self {
        self.trace_writes = enabled;
        self
    }
}
