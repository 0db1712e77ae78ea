use image::Rgb;

use crate::error::FilterError;
use crate::hybrid_image::convolve::ConvolveExt;
use crate::hybrid_image::gaussian_kernel::Kernel;
use crate::hybrid_image::hybrid_combine::{combine_channels, ensure_dimensions_match};
use crate::Image;

/// Trait for extracting the low-frequency content of an image.
pub trait LowPassFilterExt {
    /// Blurs the image by convolving every channel with `kernel`.
    ///
    /// The border band, where no full kernel window fits, comes back
    /// zeroed; apply
    /// [`MaskBordersExt`](crate::MaskBordersExt::mask_borders) before
    /// presenting the result.
    fn low_pass(&self, kernel: &Kernel) -> Self;
}

impl LowPassFilterExt for Image<Rgb<f32>> {
    fn low_pass(&self, kernel: &Kernel) -> Self {
        self.convolve(kernel)
    }
}

/// Trait for extracting the high-frequency residual of an image.
pub trait HighPassFilterExt {
    /// Subtracts `low_pass` from `self` channel-wise, leaving only
    /// the frequency content the blur removed.
    ///
    /// # Errors
    ///
    /// * `FilterError::DimensionMismatch` - if the images differ in size
    fn high_pass(&self, low_pass: &Self) -> Result<Self, FilterError>
    where
        Self: Sized;
}

impl HighPassFilterExt for Image<Rgb<f32>> {
    fn high_pass(&self, low_pass: &Self) -> Result<Self, FilterError> {
        ensure_dimensions_match(self, low_pass)?;
        Ok(combine_channels(self, low_pass, |original, blurred| {
            original - blurred
        }))
    }
}
