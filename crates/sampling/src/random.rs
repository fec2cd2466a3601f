//! Bounded random integers and points drawn from an injected RNG.

use rand::Rng;

use crate::geom::{Point, Rect};
use crate::{Result, SamplingError};

/// Uniform integer in `[min, max)`.
pub fn rand_int<R: Rng + ?Sized>(min: i32, max: i32, rng: &mut R) -> Result<i32> {
    if max <= min {
        return Err(SamplingError::EmptyRange { min, max });
    }
    Ok(rng.gen_range(min..max))
}

/// Uniform point inside `bounds` (`max` excluded on both axes).
pub fn rand_point<R: Rng + ?Sized>(bounds: Rect, rng: &mut R) -> Result<Point> {
    Ok(Point {
        x: rand_int(bounds.min.x, bounds.max.x, rng)?,
        y: rand_int(bounds.min.y, bounds.max.y, rng)?,
    })
}
