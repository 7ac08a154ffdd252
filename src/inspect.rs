use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use icnspack_core::{parse_container, FormatError, IconSize};
use serde::Serialize;
use thiserror::Error;

use crate::helpers::format_file_size;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkSummary {
    pub type_code: String,
    /// `None` for chunk types outside the packed PNG sizes.
    pub pixels: Option<IconSize>,
    pub payload_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    pub total_len: u32,
    pub chunks: Vec<ChunkSummary>,
}

impl ContainerSummary {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        let container = parse_container(bytes)?;
        let chunks = container
            .chunks
            .iter()
            .map(|chunk| ChunkSummary {
                type_code: String::from_utf8_lossy(&chunk.type_code).into_owned(),
                pixels: IconSize::from_type_code(&chunk.type_code),
                payload_len: chunk.payload.len(),
            })
            .collect();

        Ok(Self {
            total_len: container.total_len,
            chunks,
        })
    }

    pub fn read(path: &Path) -> Result<Self, InspectError> {
        let bytes = fs::read(path).map_err(|source| InspectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes).map_err(|source| InspectError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// One line per chunk, followed by the total.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        for chunk in &self.chunks {
            let size = match chunk.pixels {
                Some(size) => format!("{}px", size.pixels()),
                None => "unknown".to_string(),
            };
            let _ = writeln!(
                out,
                "{}  {:>7}  {}",
                chunk.type_code,
                size,
                format_file_size(chunk.payload_len as u64)
            );
        }
        let _ = write!(
            out,
            "total {} in {} chunks",
            format_file_size(self.total_len as u64),
            self.chunks.len()
        );
        out
    }
}
