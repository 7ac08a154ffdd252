use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use icnspack_core::{build_container, encode_chunk, FormatError, IconSize};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::exit_codes;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Missing file: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl PackError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> PackError + '_ {
        move |source| PackError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PackError::MissingInputFile { .. } => exit_codes::MISSING_INPUT,
            PackError::Io { .. } | PackError::Format(_) => exit_codes::FAILURE,
        }
    }
}

/// One packing run: a source image per icon size, plus the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackJob {
    /// Indexed like `IconSize::ALL`.
    pub sources: [PathBuf; 4],
    pub output: PathBuf,
}

impl PackJob {
    pub fn new(
        icon_128: impl Into<PathBuf>,
        icon_256: impl Into<PathBuf>,
        icon_512: impl Into<PathBuf>,
        icon_1024: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sources: [
                icon_128.into(),
                icon_256.into(),
                icon_512.into(),
                icon_1024.into(),
            ],
            output: output.into(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (IconSize, &Path)> {
        IconSize::ALL
            .into_iter()
            .zip(self.sources.iter().map(PathBuf::as_path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    pub output: PathBuf,
    pub total_len: u32,
    pub payloads: Vec<(IconSize, usize)>,
}

/// Fails on the first source that is not an existing regular file.
pub fn check_inputs(job: &PackJob) -> Result<(), PackError> {
    for (_, path) in job.entries() {
        if !path.is_file() {
            return Err(PackError::MissingInputFile {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Reads every source, frames it under its size's type code and writes the
/// container to `job.output`, replacing any existing file.
pub fn pack(job: &PackJob) -> Result<PackReport, PackError> {
    check_inputs(job)?;

    let mut chunks = Vec::with_capacity(job.sources.len());
    let mut payloads = Vec::with_capacity(job.sources.len());
    for (size, path) in job.entries() {
        let data = fs::read(path).map_err(PackError::io(path))?;
        debug!(size = size.pixels(), path = %path.display(), bytes = data.len(), "read icon");
        chunks.push(encode_chunk(&size.type_code(), &data)?);
        payloads.push((size, data.len()));
    }

    let container = build_container(&chunks)?;
    let total_len = container.len() as u32;

    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            info!(dir = %parent.display(), "creating output directory");
        }
        fs::create_dir_all(parent).map_err(PackError::io(parent))?;
    }
    fs::write(&job.output, &container).map_err(PackError::io(&job.output))?;
    debug!(path = %job.output.display(), bytes = total_len, "container written");

    Ok(PackReport {
        output: job.output.clone(),
        total_len,
        payloads,
    })
}
