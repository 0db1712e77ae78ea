use image::Rgb;
use log::debug;

use crate::error::PipelineError;
use crate::hybrid_image::frequency_split::{HighPassFilterExt, LowPassFilterExt};
use crate::hybrid_image::gaussian_kernel::Kernel;
use crate::hybrid_image::hybrid_combine::HybridCombineExt;
use crate::hybrid_image::mask_borders::MaskBordersExt;
use crate::Image;

/// Every intermediate the pipeline produces, so callers can present
/// each stage alongside the final hybrid.
#[derive(Debug, Clone)]
pub struct HybridStages {
    /// The Gaussian kernel the run was built with
    pub kernel: Kernel,
    /// Blurred version of the image meant to be seen from afar
    pub low_pass_distant: Image<Rgb<f32>>,
    /// Blurred version of the image meant to be seen up close
    pub low_pass_close: Image<Rgb<f32>>,
    /// Fine detail of the close image, the blur residual
    pub high_pass_close: Image<Rgb<f32>>,
    /// The composite: distant low frequencies plus close high frequencies
    pub hybrid: Image<Rgb<f32>>,
}

/// Runs the full hybrid-image pipeline.
///
/// `distant` supplies the low-frequency content (what the composite
/// looks like from far away), `close` the high-frequency content
/// (what it looks like from near). Both images are blurred with the
/// same `sigma`-derived kernel; every intermediate has its invalid
/// convolution border blanked before it is used further.
///
/// # Errors
///
/// * `PipelineError::Kernel` - if `sigma` does not describe a valid window
/// * `PipelineError::Filter` - if the two images differ in size
pub fn build_hybrid(
    distant: &Image<Rgb<f32>>,
    close: &Image<Rgb<f32>>,
    sigma: f32,
) -> Result<HybridStages, PipelineError> {
    let kernel = Kernel::gaussian(sigma)?;
    let size = kernel.size();
    debug!("built {size}x{size} gaussian kernel for sigma {sigma}");

    let mut low_pass_distant = distant.low_pass(&kernel);
    low_pass_distant.mask_borders(size, size);
    let mut low_pass_close = close.low_pass(&kernel);
    low_pass_close.mask_borders(size, size);
    debug!(
        "low-pass stages ready: distant {:?}, close {:?}",
        distant.dimensions(),
        close.dimensions()
    );

    let mut high_pass_close = close.high_pass(&low_pass_close)?;
    high_pass_close.mask_borders(size, size);

    let mut hybrid = low_pass_distant.combine(&high_pass_close)?;
    hybrid.mask_borders(size, size);
    debug!("hybrid composed at {:?}", hybrid.dimensions());

    Ok(HybridStages {
        kernel,
        low_pass_distant,
        low_pass_close,
        high_pass_close,
        hybrid,
    })
}
