use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("type code must be exactly 4 bytes, got {len}")]
    InvalidTypeCode { len: usize },

    #[error("{len} bytes do not fit a 32-bit length field")]
    TooLarge { len: usize },

    #[error("unexpected end of data at offset {offset}: {needed} more bytes needed")]
    Truncated { offset: usize, needed: usize },

    #[error("missing icns magic, found {found:?}")]
    BadMagic { found: [u8; 4] },

    #[error("declared container length {declared} does not match {actual} bytes")]
    LengthMismatch { declared: u32, actual: usize },

    #[error("chunk at offset {offset} has invalid length {length}")]
    BadChunkLength { offset: usize, length: u32 },
}
