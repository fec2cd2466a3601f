//! Disc rasterisation.

use image::{Rgba, RgbaImage};
use sampling::{Point, euclidean_distance};

/// Fill every pixel within `radius` of `center` with `color`.
///
/// Pixels falling outside the canvas are skipped. Returns how many pixels were
/// painted.
pub fn draw_disc(canvas: &mut RgbaImage, center: Point, radius: u32, color: Rgba<u8>) -> usize {
    let r = i64::from(radius);
    let limit = f64::from(radius);
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let mut painted = 0;

    let x_range = (i64::from(center.x) - r).max(0)..=(i64::from(center.x) + r).min(width - 1);
    let y_range = (i64::from(center.y) - r).max(0)..=(i64::from(center.y) + r).min(height - 1);

    for y in y_range {
        for x in x_range.clone() {
            // Both coordinates are inside the canvas, so they fit in i32 and u32.
            let p = Point::new(x as i32, y as i32);
            if euclidean_distance(center, p) <= limit {
                canvas.put_pixel(x as u32, y as u32, color);
                painted += 1;
            }
        }
    }

    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn radius_zero_paints_center_only() {
        let mut canvas = RgbaImage::from_pixel(5, 5, WHITE);
        let painted = draw_disc(&mut canvas, Point::new(2, 2), 0, RED);

        assert_eq!(painted, 1);
        assert_eq!(*canvas.get_pixel(2, 2), RED);
        assert_eq!(*canvas.get_pixel(1, 2), WHITE);
    }

    #[test]
    fn radius_one_paints_plus_shape() {
        let mut canvas = RgbaImage::from_pixel(5, 5, WHITE);
        let painted = draw_disc(&mut canvas, Point::new(2, 2), 1, RED);

        assert_eq!(painted, 5);
        assert_eq!(*canvas.get_pixel(2, 1), RED);
        assert_eq!(*canvas.get_pixel(3, 2), RED);
        // Diagonal neighbour is sqrt(2) away.
        assert_eq!(*canvas.get_pixel(3, 3), WHITE);
    }

    #[test]
    fn radius_two_disc_area() {
        let mut canvas = RgbaImage::from_pixel(9, 9, WHITE);
        // Lattice points with x^2 + y^2 <= 4.
        assert_eq!(draw_disc(&mut canvas, Point::new(4, 4), 2, RED), 13);
    }

    #[test]
    fn disc_clipped_at_corner() {
        let mut canvas = RgbaImage::from_pixel(4, 4, WHITE);
        let painted = draw_disc(&mut canvas, Point::new(0, 0), 1, RED);

        assert_eq!(painted, 3);
        assert_eq!(*canvas.get_pixel(0, 0), RED);
    }

    #[test]
    fn disc_fully_outside_paints_nothing() {
        let mut canvas = RgbaImage::from_pixel(4, 4, WHITE);
        assert_eq!(draw_disc(&mut canvas, Point::new(-10, 20), 3, RED), 0);
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }
}
