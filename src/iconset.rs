use std::fs;
use std::path::{Path, PathBuf};

use icnspack_core::IconSize;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::helpers::icon_file_name;
use crate::icon::generate_icon;
use crate::pack::PackJob;

#[derive(Debug, Error)]
pub enum IconsetError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Downscales `base` to every icon size. The largest size reuses `base`.
pub fn render_sizes(base: &RgbaImage) -> Vec<(IconSize, RgbaImage)> {
    IconSize::ALL
        .par_iter()
        .map(|&size| {
            let px = size.pixels();
            let img = if base.dimensions() == (px, px) {
                base.clone()
            } else {
                imageops::resize(base, px, px, FilterType::Lanczos3)
            };
            (size, img)
        })
        .collect()
}

/// Renders the logo and writes one PNG per icon size into `dir`.
///
/// The returned paths are in `IconSize::ALL` order.
pub fn write_iconset(dir: &Path) -> Result<[PathBuf; 4], IconsetError> {
    fs::create_dir_all(dir).map_err(|source| IconsetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let base = generate_icon(IconSize::Px1024.pixels());
    let rendered = render_sizes(&base);

    let mut paths: [PathBuf; 4] = Default::default();
    for ((size, img), slot) in rendered.into_iter().zip(paths.iter_mut()) {
        let path = dir.join(icon_file_name(size.pixels()));
        img.save(&path).map_err(|source| IconsetError::Encode {
            path: path.clone(),
            source,
        })?;
        debug!(size = size.pixels(), path = %path.display(), "icon written");
        *slot = path;
    }

    Ok(paths)
}

/// A pack job over a directory produced by `write_iconset`.
pub fn iconset_job(dir: &Path, output: impl Into<PathBuf>) -> PackJob {
    let [a, b, c, d] = IconSize::ALL.map(|size| dir.join(icon_file_name(size.pixels())));
    PackJob::new(a, b, c, d, output)
}
