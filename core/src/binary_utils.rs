use crate::FormatError;

pub fn read_bytes<'a>(offset: &mut usize, bytes: &'a [u8], size: usize) -> Result<&'a [u8], FormatError> {
    let available = bytes.len().saturating_sub(*offset);
    if available < size {
        return Err(FormatError::Truncated {
            offset: *offset,
            needed: size - available,
        });
    }

    let result = &bytes[*offset..*offset + size];
    *offset += size;

    Ok(result)
}

pub fn read_tag(offset: &mut usize, bytes: &[u8]) -> Result<[u8; 4], FormatError> {
    let mut tag = [0u8; 4];
    tag.copy_from_slice(read_bytes(offset, bytes, 4)?);
    Ok(tag)
}

pub fn read_u32(offset: &mut usize, bytes: &[u8]) -> Result<u32, FormatError> {
    Ok(u32::from_be_bytes(read_tag(offset, bytes)?))
}

/// Length field value for `body_len` bytes behind an 8-byte header.
pub fn framed_length(body_len: usize) -> Result<u32, FormatError> {
    body_len
        .checked_add(8)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(FormatError::TooLarge { len: body_len })
}
