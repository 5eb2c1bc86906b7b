use thiserror::Error;

/// Errors that can occur while decoding or encoding bencode data.
///
/// Decode errors carry the byte offset at which the condition was detected,
/// so callers can report a precise diagnostic for malformed input.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The input buffer was empty.
    #[error("empty input")]
    EmptyInput,

    /// The input ended before the current value was complete.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A byte in value position was not a valid type marker
    /// (`i`, `l`, `d`, or a string-length digit).
    #[error("invalid type marker {byte:#04x} at offset {offset}")]
    InvalidTypeMarker { byte: u8, offset: usize },

    /// A malformed integer: empty body, non-digit bytes, a leading zero,
    /// `-0`, or a value outside the `i64` range.
    #[error("invalid integer at offset {offset}")]
    InvalidInteger { offset: usize },

    /// A malformed string length prefix: non-digit bytes, a leading zero,
    /// or a length outside the `usize` range.
    #[error("invalid string length at offset {offset}")]
    InvalidStringLength { offset: usize },

    /// A dictionary key was not a byte string.
    #[error("dictionary key is not a string at offset {offset}")]
    NonStringDictKey { offset: usize },

    /// An `e` terminator with no open container to close, or one closing a
    /// dictionary whose last key has no value.
    #[error("unexpected terminator at offset {offset}")]
    UnexpectedTerminator { offset: usize },

    /// Extra bytes after the first complete value.
    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },

    /// Containers nested deeper than the configured maximum.
    #[error("nesting too deep at offset {offset}")]
    NestingTooDeep { offset: usize },

    /// An I/O error while writing encoded output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
