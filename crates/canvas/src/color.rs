//! Colour constants and random colour generation.

use image::Rgba;
use rand::Rng;

/// Opaque white, the background of a fresh canvas.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Random opaque colour.
pub fn rand_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba<u8> {
    Rgba([
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        255,
    ])
}
