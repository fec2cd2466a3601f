//! Stipple rendering pipeline: load, sample, draw, save.

use anyhow::Context;
use canvas::{WHITE, darkness_weights, draw_disc, load_image, rand_color, save_png};
use image::{DynamicImage, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sampling::{Point, Rect, WeightedSampler, rand_int, rand_point};
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Outcome of one rendering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub width: u32,
    pub height: u32,
    /// Dots painted onto the canvas.
    pub drawn: u32,
    /// Draws where the search found no pixel.
    pub missed: u32,
}

/// Run the full pipeline described by `config` and write the PNG.
pub fn render(config: &AppConfig) -> Result<RenderSummary, anyhow::Error> {
    let input = config.input.as_deref().context("no input image configured")?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let source = load_image(input)?;
    info!(
        input = %input.display(),
        width = source.width(),
        height = source.height(),
        "Source image loaded"
    );

    let (image, summary) = stipple(&source, config, &mut rng)?;
    save_png(&DynamicImage::ImageRgba8(image), &config.output)?;
    Ok(summary)
}

/// Redraw `source` as weighted dots on a white canvas of the same size.
///
/// Darker source pixels are proportionally more likely to receive a dot.
pub fn stipple<R: Rng + ?Sized>(
    source: &DynamicImage,
    config: &AppConfig,
    rng: &mut R,
) -> Result<(RgbaImage, RenderSummary), anyhow::Error> {
    let (width, height) = (source.width(), source.height());
    let weights = darkness_weights(&source.to_luma8(), config.bias);
    let sampler = WeightedSampler::new(weights)
        .context("source image has no pixel dark enough to stipple")?;
    let colors = source.to_rgba8();
    let jitter = i32::try_from(config.jitter).context("jitter out of range")?;
    let jitter_box = Rect::new(
        Point::new(-jitter, -jitter),
        Point::new(jitter + 1, jitter + 1),
    );
    let min_radius = i32::try_from(config.min_radius).context("min radius out of range")?;
    let max_radius = i32::try_from(config.max_radius).context("max radius out of range")?;

    let mut sheet = RgbaImage::from_pixel(width, height, WHITE);
    let mut drawn = 0u32;
    let mut missed = 0u32;

    debug!(
        width,
        height,
        dots = config.dots,
        search = %config.search,
        "Stippling"
    );

    for _ in 0..config.dots {
        let Some(index) = sampler.pick_with_rng(config.search, rng) else {
            missed += 1;
            continue;
        };
        // `index < width * height`, so both coordinates fit the image.
        let x = (index % width as usize) as u32;
        let y = (index / width as usize) as u32;

        let offset = rand_point(jitter_box, rng)?;
        let center = Point::new(x as i32 + offset.x, y as i32 + offset.y);
        let radius = rand_int(min_radius, max_radius.saturating_add(1), rng)? as u32;
        let mut color = if config.random_colors {
            rand_color(rng)
        } else {
            *colors.get_pixel(x, y)
        };
        color.0[3] = 255;

        draw_disc(&mut sheet, center, radius, color);
        drawn += 1;
    }

    if missed > 0 {
        warn!(missed, search = %config.search, "Some draws found no pixel");
    }

    Ok((
        sheet,
        RenderSummary {
            width,
            height,
            drawn,
            missed,
        },
    ))
}
