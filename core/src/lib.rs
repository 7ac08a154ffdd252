//! Binary layout of the macOS `icns` icon container.
//!
//! A container is the magic `icns`, a big-endian u32 total length, then a
//! run of chunks. Each chunk is a 4-byte type code, a big-endian u32 length
//! that counts its own 8-byte header, and the payload.

mod binary_utils;
mod chunk;
mod container;
mod error;
mod models;

pub use chunk::{encode_chunk, Chunk, CHUNK_HEADER_LENGTH};
pub use container::{build_container, parse_container, Container, CONTAINER_MAGIC};
pub use error::FormatError;
pub use models::*;
