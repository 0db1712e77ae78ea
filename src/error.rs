use thiserror::Error;

/// Error type for Gaussian kernel construction
///
/// This error type represents the failure modes of building a
/// convolution kernel, either from a sigma parameter or from
/// caller-supplied weights.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// Sigma is negative
    ///
    /// A negative standard deviation does not describe a window and
    /// is rejected before any kernel is built.
    #[error("Sigma value cannot be negative: {0}")]
    NegativeSigma(f32),

    /// Sigma is exactly zero
    ///
    /// A zero-width Gaussian degenerates to a kernel that blanks the
    /// image, so it is rejected up front.
    #[error("Sigma value of zero will result in blank images")]
    ZeroSigma,

    /// Sigma is NaN or infinite
    #[error("Sigma value must be finite, got {0}")]
    NonFiniteSigma(f32),

    /// Caller-supplied kernel has an even side length
    ///
    /// Kernels must have a unique center cell, which requires an odd
    /// side length.
    #[error("Kernel side length must be odd, got {0}")]
    EvenSize(u32),

    /// Caller-supplied weights do not fill a square kernel
    #[error("Kernel weight count mismatch: expected {expected}, got {actual}")]
    WeightCountMismatch { expected: usize, actual: usize },
}

/// Error type for frequency-split and combination operations
///
/// Operations that pair two images (high-pass extraction, hybrid
/// combination) require matching dimensions and fail otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The two input images have different dimensions
    ///
    /// The pipeline guarantees matching dimensions by construction,
    /// but the operations are checked so they stay safe when reused
    /// with arbitrary inputs.
    #[error("Image dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },
}

/// Error type for the distance pyramid visualization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PyramidError {
    /// The image is not strictly larger than the kernel on both axes
    ///
    /// Trimming the convolution border off such an image would leave
    /// no pixels to tile the pyramid with.
    #[error("Image ({width}x{height}) is too small to trim a {kernel_size}x{kernel_size} convolution border")]
    ImageTooSmall {
        width: u32,
        height: u32,
        kernel_size: u32,
    },
}

/// Error type for the end-to-end hybrid pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}
