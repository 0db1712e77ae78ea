use image::Rgb;
use imageproc::map::map_colors2;

use crate::error::FilterError;
use crate::Image;

/// Trait for synthesizing a hybrid image from a low-pass and a
/// high-pass input.
///
/// The hybrid is the per-pixel, per-channel sum of the two: one
/// image's coarse content plus the other's fine detail, so the
/// perceived content changes with viewing distance.
pub trait HybridCombineExt {
    /// Adds `high_pass` onto `self` channel-wise.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - if the images differ in size
    fn combine(&self, high_pass: &Self) -> Result<Self, FilterError>
    where
        Self: Sized;
}

impl HybridCombineExt for Image<Rgb<f32>> {
    fn combine(&self, high_pass: &Self) -> Result<Self, FilterError> {
        ensure_dimensions_match(self, high_pass)?;
        Ok(combine_channels(self, high_pass, |low, high| low + high))
    }
}

/// Applies a binary operator to every channel of every pixel pair.
/// Backs both hybrid combination (add) and high-pass extraction
/// (subtract). Dimensions must already be verified.
pub(crate) fn combine_channels<F>(
    a: &Image<Rgb<f32>>,
    b: &Image<Rgb<f32>>,
    op: F,
) -> Image<Rgb<f32>>
where
    F: Fn(f32, f32) -> f32,
{
    map_colors2(a, b, |pixel_a, pixel_b| {
        let Rgb([a_red, a_green, a_blue]) = pixel_a;
        let Rgb([b_red, b_green, b_blue]) = pixel_b;
        Rgb([
            op(a_red, b_red),
            op(a_green, b_green),
            op(a_blue, b_blue),
        ])
    })
}

pub(crate) fn ensure_dimensions_match(
    expected: &Image<Rgb<f32>>,
    actual: &Image<Rgb<f32>>,
) -> Result<(), FilterError> {
    if expected.dimensions() != actual.dimensions() {
        return Err(FilterError::DimensionMismatch {
            expected: expected.dimensions(),
            actual: actual.dimensions(),
        });
    }
    Ok(())
}
