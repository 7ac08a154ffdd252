use crate::binary_utils::{framed_length, read_tag, read_u32};
use crate::{Chunk, FormatError};

pub const CONTAINER_MAGIC: [u8; 4] = *b"icns";

/// A parsed icns file. Payloads borrow from the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<'a> {
    pub total_len: u32,
    pub chunks: Vec<Chunk<'a>>,
}

impl<'a> Container<'a> {
    pub fn chunk(&self, type_code: &[u8]) -> Option<&Chunk<'a>> {
        self.chunks.iter().find(|c| c.type_code == type_code)
    }
}

/// Wraps already-encoded chunks, in the given order, under the icns header.
pub fn build_container<I>(chunks: I) -> Result<Vec<u8>, FormatError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut body = Vec::new();
    for chunk in chunks {
        body.extend_from_slice(chunk.as_ref());
    }

    let total_len = framed_length(body.len())?;
    let mut result = Vec::with_capacity(8 + body.len());
    result.extend_from_slice(&CONTAINER_MAGIC);
    result.extend_from_slice(&total_len.to_be_bytes());
    result.extend_from_slice(&body);

    Ok(result)
}

pub fn parse_container(bytes: &[u8]) -> Result<Container<'_>, FormatError> {
    let mut offset = 0;
    let magic = read_tag(&mut offset, bytes)?;
    if magic != CONTAINER_MAGIC {
        return Err(FormatError::BadMagic { found: magic });
    }

    let total_len = read_u32(&mut offset, bytes)?;
    if total_len as usize != bytes.len() {
        return Err(FormatError::LengthMismatch {
            declared: total_len,
            actual: bytes.len(),
        });
    }

    let mut chunks = Vec::new();
    while offset < bytes.len() {
        chunks.push(Chunk::from_bytes(bytes, &mut offset)?);
    }

    Ok(Container { total_len, chunks })
}
