//! Image file loading and PNG saving.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use crate::{CanvasError, Result};

/// Read and decode an image file.
///
/// The format is sniffed from the file's contents, so the extension does not
/// have to match.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let io_err = |source| CanvasError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(io_err)?;
    let format = reader.format();
    let img = reader.decode().map_err(|source| CanvasError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        ?format,
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(img)
}

/// Encode `img` as PNG and write it to `path`, replacing any existing file.
pub fn save_png(img: &DynamicImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| CanvasError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| CanvasError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Saved PNG"
    );
    Ok(())
}
