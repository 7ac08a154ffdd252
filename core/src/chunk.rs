use crate::binary_utils::{framed_length, read_bytes, read_tag, read_u32};
use crate::FormatError;

/// Type code plus length field.
pub const CHUNK_HEADER_LENGTH: usize = 8;

/// A typed, length-prefixed record inside an icns container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub type_code: [u8; 4],
    pub payload: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub fn new(type_code: &[u8], payload: &'a [u8]) -> Result<Chunk<'a>, FormatError> {
        let type_code: [u8; 4] = type_code
            .try_into()
            .map_err(|_| FormatError::InvalidTypeCode { len: type_code.len() })?;

        Ok(Self { type_code, payload })
    }

    /// Value of the on-disk length field.
    pub fn length(&self) -> Result<u32, FormatError> {
        framed_length(self.payload.len())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        let length = self.length()?;
        let mut result = Vec::with_capacity(CHUNK_HEADER_LENGTH + self.payload.len());

        result.extend_from_slice(&self.type_code);
        result.extend_from_slice(&length.to_be_bytes());
        result.extend_from_slice(self.payload);

        Ok(result)
    }

    /// Reads one chunk starting at `offset` and moves `offset` past it.
    pub fn from_bytes(bytes: &'a [u8], offset: &mut usize) -> Result<Chunk<'a>, FormatError> {
        let start = *offset;
        let mut cursor = start;
        let type_code = read_tag(&mut cursor, bytes)?;
        let length = read_u32(&mut cursor, bytes)?;

        if (length as usize) < CHUNK_HEADER_LENGTH {
            return Err(FormatError::BadChunkLength { offset: start, length });
        }

        let payload = read_bytes(&mut cursor, bytes, length as usize - CHUNK_HEADER_LENGTH)
            .map_err(|_| FormatError::BadChunkLength { offset: start, length })?;
        *offset = cursor;

        Ok(Chunk { type_code, payload })
    }
}

/// Frames `payload` as `type_code || be_u32(8 + len) || payload`.
pub fn encode_chunk(type_code: &[u8], payload: &[u8]) -> Result<Vec<u8>, FormatError> {
    Chunk::new(type_code, payload)?.to_bytes()
}
