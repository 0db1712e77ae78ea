mod error;
mod hybrid_image;
#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use error::{FilterError, KernelError, PipelineError, PyramidError};
pub use hybrid_image::convolve::ConvolveExt;
pub use hybrid_image::distance_pyramid::DistancePyramidExt;
pub use hybrid_image::frequency_split::{HighPassFilterExt, LowPassFilterExt};
pub use hybrid_image::gaussian_kernel::Kernel;
pub use hybrid_image::hybrid_combine::HybridCombineExt;
pub use hybrid_image::mask_borders::MaskBordersExt;
pub use hybrid_image::pipeline::{build_hybrid, HybridStages};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
