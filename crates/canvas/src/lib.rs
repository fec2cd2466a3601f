//! Raster helpers for stipple rendering.
//!
//! Provides image load/save wrappers, pixel conversions, random colours,
//! and disc rasterisation on RGBA canvases.

pub mod color;
pub mod convert;
pub mod draw;
pub mod io;

use std::path::PathBuf;

// Re-exports for convenience
pub use color::{WHITE, rand_color};
pub use convert::{clamp_to_u8, darkness_weights};
pub use draw::draw_disc;
pub use io::{load_image, save_png};

/// Errors that can occur while reading or writing images.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode PNG {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Result type alias for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
