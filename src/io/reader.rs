use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Opens `path`, decodes it with format sniffing and converts it to RGBA8.
///
/// Sources without an alpha channel come back fully opaque. A path that does
/// not resolve to a file maps to [`Error::NotFound`]; any other failure keeps
/// its I/O or decode cause.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .map_err(|e| not_found_or(e, path))?
        .with_guessed_format()?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|e| match e {
        ImageError::IoError(io) => not_found_or(io, path),
        other => Error::Image(other),
    })?;

    info!(
        "Loaded {:?} ({:?}, {:?}, {}x{})",
        path,
        format,
        decoded.color(),
        decoded.width(),
        decoded.height()
    );

    Ok(decoded.into_rgba8())
}

fn not_found_or(e: std::io::Error, path: &Path) -> Error {
    if e.kind() == std::io::ErrorKind::NotFound {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::Io(e)
    }
}
