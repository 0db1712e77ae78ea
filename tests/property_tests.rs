//! Property-based tests for hybrid-image
//!
//! These tests use proptest to verify the mathematical invariants of
//! the kernel builder and the decomposition pipeline across ranges of
//! inputs rather than hand-picked cases.

use hybrid_image::{
    ConvolveExt, HighPassFilterExt, HybridCombineExt, Image, Kernel, LowPassFilterExt,
    MaskBordersExt,
};
use image::Rgb;
use proptest::prelude::*;

/// Strategy for image dimensions large enough to keep an interior
fn image_dimensions() -> impl Strategy<Value = (u32, u32)> {
    (8u32..=24, 8u32..=24)
}

/// Strategy for usable sigma values
fn sigma_value() -> impl Strategy<Value = f32> {
    0.05f32..4.0
}

/// Strategy for odd kernel side lengths
fn odd_kernel_size() -> impl Strategy<Value = u32> {
    (0u32..=3).prop_map(|m| 2 * m + 1)
}

/// Creates a deterministic image mixing smooth and harsh content,
/// parameterized by a seed so proptest can vary it
fn patterned_image(width: u32, height: u32, seed: f32) -> Image<Rgb<f32>> {
    let mut image: Image<Rgb<f32>> = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let fx = x as f32;
            let fy = y as f32;
            let r = ((fx * 0.37 + fy * 0.11 + seed).sin() * 0.5 + 0.5).clamp(0.0, 1.0);
            let g = if (x + y) % 3 == 0 { seed.fract() } else { 0.8 };
            let b = (fx + fy) / (width + height) as f32;
            image.put_pixel(x, y, Rgb([r, g, b]));
        }
    }
    image
}

proptest! {
    /// Property: every Gaussian kernel has an odd side, sums to one,
    /// and peaks at its unique center
    #[test]
    fn gaussian_kernel_invariants_hold(sigma in sigma_value()) {
        let kernel = Kernel::gaussian(sigma).unwrap();

        prop_assert_eq!(kernel.size() % 2, 1);
        prop_assert!(kernel.size() >= 1);

        let sum: f32 = kernel.weights().iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-4, "sum {} for sigma {}", sum, sigma);

        let center = kernel.size() / 2;
        let peak = kernel.weight(center, center);
        for y in 0..kernel.size() {
            for x in 0..kernel.size() {
                if (x, y) != (center, center) {
                    prop_assert!(kernel.weight(x, y) < peak);
                }
            }
        }
    }

    /// Property: the low-pass/high-pass split is an additive
    /// decomposition; adding the parts back reproduces the original
    #[test]
    fn decomposition_reconstructs_original(
        (width, height) in image_dimensions(),
        sigma in 0.2f32..2.0,
        seed in 0.0f32..10.0
    ) {
        let image = patterned_image(width, height, seed);
        let kernel = Kernel::gaussian(sigma).unwrap();

        let low = image.low_pass(&kernel);
        let high = image.high_pass(&low).unwrap();
        let rebuilt = low.combine(&high).unwrap();

        for (original, recovered) in image.pixels().zip(rebuilt.pixels()) {
            for c in 0..3 {
                prop_assert!((original[c] - recovered[c]).abs() < 1e-4);
            }
        }
    }

    /// Property: recombining and re-extracting gives back the same
    /// high-pass content
    #[test]
    fn high_pass_survives_combination_roundtrip(
        (width, height) in image_dimensions(),
        seed in 0.0f32..10.0
    ) {
        let image = patterned_image(width, height, seed);
        let kernel = Kernel::gaussian(0.5).unwrap();

        let low = image.low_pass(&kernel);
        let high = image.high_pass(&low).unwrap();
        let hybrid = low.combine(&high).unwrap();
        let extracted = hybrid.high_pass(&low).unwrap();

        for (expected, actual) in high.pixels().zip(extracted.pixels()) {
            for c in 0..3 {
                prop_assert!((expected[c] - actual[c]).abs() < 1e-5);
            }
        }
    }

    /// Property: convolution preserves dimensions and never touches
    /// its input
    #[test]
    fn convolution_preserves_dimensions(
        (width, height) in image_dimensions(),
        sigma in sigma_value(),
        seed in 0.0f32..10.0
    ) {
        let image = patterned_image(width, height, seed);
        let copy = image.clone();
        let kernel = Kernel::gaussian(sigma).unwrap();

        let result = image.convolve(&kernel);

        prop_assert_eq!(result.dimensions(), (width, height));
        prop_assert_eq!(image, copy);
    }

    /// Property: masking zeroes exactly the band outside the interior
    /// rectangle and nothing inside it
    #[test]
    fn mask_borders_splits_image_into_band_and_interior(
        kernel_size in odd_kernel_size(),
        seed in 0.0f32..10.0
    ) {
        let band = kernel_size / 2 + 1;
        // Keep a non-empty interior
        let width = 2 * band + 4;
        let height = 2 * band + 6;
        let image = patterned_image(width, height, seed);

        let mut masked = image.clone();
        masked.mask_borders(kernel_size, kernel_size);

        for y in 0..height {
            for x in 0..width {
                let in_interior =
                    (band..width - band).contains(&x) && (band..height - band).contains(&y);
                let expected = if in_interior {
                    *image.get_pixel(x, y)
                } else {
                    Rgb([0.0, 0.0, 0.0])
                };
                prop_assert_eq!(*masked.get_pixel(x, y), expected);
            }
        }
    }
}
