//! Test utilities for hybrid-image
//!
//! This module provides common fixtures for testing the filtering
//! pipeline. It is only compiled when running tests.

use image::{Luma, Pixel, Rgb};
use itertools::iproduct;

use crate::Image;

/// Creates a single-channel image filled with one value.
pub fn constant_luma_image(width: u32, height: u32, value: f32) -> Image<Luma<f32>> {
    Image::from_pixel(width, height, Luma([value]))
}

/// Creates an RGB image filled with one color.
pub fn constant_rgb_image(width: u32, height: u32, color: [f32; 3]) -> Image<Rgb<f32>> {
    Image::from_pixel(width, height, Rgb(color))
}

/// Creates an RGB image with a smooth per-channel gradient, useful
/// when a test needs spatial variation without randomness.
pub fn gradient_rgb_image(width: u32, height: u32) -> Image<Rgb<f32>> {
    let mut image: Image<Rgb<f32>> = Image::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let r = x as f32 / width as f32;
        let g = y as f32 / height as f32;
        let b = (x + y) as f32 / (width + height) as f32;
        image.put_pixel(x, y, Rgb([r, g, b]));
    });
    image
}

/// Compares two pixel values with a tolerance for floating-point
/// precision errors.
pub fn pixels_approx_equal<P>(expected: P, actual: P, tolerance: f32) -> bool
where
    P: Pixel<Subpixel = f32>,
{
    expected
        .channels()
        .iter()
        .zip(actual.channels())
        .all(|(e, a)| (e - a).abs() <= tolerance)
}

/// Compares two images pixel by pixel with a tolerance for
/// floating-point errors. Dimensions must match.
pub fn images_approx_equal<P>(expected: &Image<P>, actual: &Image<P>, tolerance: f32) -> bool
where
    P: Pixel<Subpixel = f32>,
{
    if expected.dimensions() != actual.dimensions() {
        return false;
    }
    expected
        .pixels()
        .zip(actual.pixels())
        .all(|(e, a)| pixels_approx_equal(*e, *a, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_rgb_image_varies_across_both_axes() {
        let image = gradient_rgb_image(10, 10);
        assert_eq!(image.dimensions(), (10, 10));
        assert!(image.get_pixel(9, 0)[0] > image.get_pixel(0, 0)[0]);
        assert!(image.get_pixel(0, 9)[1] > image.get_pixel(0, 0)[1]);
    }

    #[test]
    fn images_approx_equal_with_tolerant_comparison_returns_true() {
        let image = constant_rgb_image(4, 4, [0.5, 0.5, 0.5]);
        let mut nudged = image.clone();
        nudged.put_pixel(0, 0, Rgb([0.5004, 0.5, 0.5]));

        assert!(images_approx_equal(&image, &nudged, 1e-3));
        assert!(!images_approx_equal(&image, &nudged, 1e-4));
    }
}
