use itertools::iproduct;

use crate::error::KernelError;

/// Square convolution kernel with an odd side length.
///
/// Weights are stored row-major, so the weight applied to the image
/// offset `(x, y)` within a window lives at index `y * size + x`. The
/// odd side length guarantees a unique center cell at
/// `(size / 2, size / 2)`.
///
/// Only Gaussian generation is provided, but [`Kernel::from_weights`]
/// accepts any square grid so the convolver stays kernel-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: u32,
    weights: Vec<f32>,
}

impl Kernel {
    /// Builds a normalized isotropic 2D Gaussian kernel.
    ///
    /// The side length is `floor(8 * sigma + 1)`, incremented by one
    /// if even, so the window spans roughly four standard deviations
    /// on each side of the center. Weights sum to 1, which keeps
    /// constant regions unchanged under convolution.
    ///
    /// # Arguments
    ///
    /// * `sigma` - Standard deviation of the Gaussian, strictly positive
    ///
    /// # Errors
    ///
    /// * `KernelError::NegativeSigma` - if `sigma` is negative
    /// * `KernelError::ZeroSigma` - if `sigma` is exactly zero
    /// * `KernelError::NonFiniteSigma` - if `sigma` is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// use hybrid_image::Kernel;
    ///
    /// # fn example() -> Result<(), hybrid_image::KernelError> {
    /// let kernel = Kernel::gaussian(2.0)?;
    /// assert_eq!(kernel.size(), 17);
    /// # Ok(())
    /// # }
    /// ```
    pub fn gaussian(sigma: f32) -> Result<Self, KernelError> {
        if !sigma.is_finite() {
            return Err(KernelError::NonFiniteSigma(sigma));
        }
        if sigma < 0.0 {
            return Err(KernelError::NegativeSigma(sigma));
        }
        if sigma == 0.0 {
            return Err(KernelError::ZeroSigma);
        }

        let mut size = (8.0 * sigma + 1.0) as u32;
        if size % 2 == 0 {
            size += 1;
        }

        let center = (size / 2) as i64;
        let two_sigma_sq = 2.0 * f64::from(sigma) * f64::from(sigma);
        let mut weights: Vec<f32> = iproduct!(0..size, 0..size)
            .map(|(y, x)| {
                let dy = i64::from(y) - center;
                let dx = i64::from(x) - center;
                let dist_sq = (dx * dx + dy * dy) as f64;
                (-dist_sq / two_sigma_sq).exp() as f32
            })
            .collect();

        let sum: f32 = weights.iter().sum();
        for weight in &mut weights {
            *weight /= sum;
        }

        Ok(Self { size, weights })
    }

    /// Wraps caller-supplied weights as a square kernel.
    ///
    /// # Errors
    ///
    /// * `KernelError::EvenSize` - if `size` is even (no unique center)
    /// * `KernelError::WeightCountMismatch` - if `weights.len() != size * size`
    pub fn from_weights(size: u32, weights: Vec<f32>) -> Result<Self, KernelError> {
        if size % 2 == 0 {
            return Err(KernelError::EvenSize(size));
        }
        let expected = (size * size) as usize;
        if weights.len() != expected {
            return Err(KernelError::WeightCountMismatch {
                expected,
                actual: weights.len(),
            });
        }
        Ok(Self { size, weights })
    }

    /// Side length of the kernel. Always odd.
    #[inline]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Half the side length, i.e. the width of the border band a
    /// convolution with this kernel cannot fill.
    #[inline]
    pub const fn margin(&self) -> u32 {
        self.size / 2
    }

    /// Row-major kernel weights.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight at column `x`, row `y`.
    #[inline]
    pub fn weight(&self, x: u32, y: u32) -> f32 {
        self.weights[(y * self.size + x) as usize]
    }
}
