//! Pixel value conversions.

use image::GrayImage;
use tracing::debug;

/// Narrow an `i16` to a pixel channel, saturating at both ends.
pub fn clamp_to_u8(x: i16) -> u8 {
    match x {
        ..1 => 0,
        255.. => 255,
        _ => x as u8,
    }
}

/// Per-pixel darkness in row-major order, shifted by `bias`.
///
/// Black pixels weigh 255 and white pixels 0 before the bias; the result is
/// clamped to `0..=255`. Used to make dark regions attract more stipples.
pub fn darkness_weights(img: &GrayImage, bias: i16) -> Vec<u8> {
    let (width, height) = img.dimensions();
    debug!(width, height, bias, "Computing darkness weights");

    img.pixels()
        .map(|p| {
            let darkness = 255 - i16::from(p.0[0]);
            clamp_to_u8(darkness.saturating_add(bias))
        })
        .collect()
}
