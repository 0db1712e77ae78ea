use image::{ImageBuffer, Luma, Rgb};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::hybrid_image::gaussian_kernel::Kernel;
use crate::Image;

/// Trait providing 2D spatial convolution against a square [`Kernel`].
///
/// The output has the same dimensions as the input. Only positions
/// whose full kernel window lies inside the input are computed; the
/// surrounding border band is left at zero and is expected to be
/// blanked afterwards with
/// [`MaskBordersExt`](crate::MaskBordersExt::mask_borders). The result
/// of each window is written at the window's center, offset
/// `(size / 2, size / 2)` from its top-left corner.
///
/// The operation is a correlation: kernel indices increase in the same
/// direction as image indices, with no flipping. The input buffer is
/// never written; output always goes to a fresh buffer.
pub trait ConvolveExt {
    /// Convolution output type
    type Output;

    /// Convolves the image with `kernel`, producing a new image of the
    /// same dimensions.
    ///
    /// A kernel at least as large as the image computes nothing and
    /// yields an all-zero result.
    fn convolve(&self, kernel: &Kernel) -> Self::Output;
}

impl ConvolveExt for Image<Luma<f32>> {
    type Output = Self;

    fn convolve(&self, kernel: &Kernel) -> Self {
        let (width, height) = self.dimensions();
        let plane = convolve_plane(self.as_raw(), width as usize, height as usize, kernel);
        // Plane length equals width * height by construction
        unsafe { ImageBuffer::from_raw(width, height, plane).unwrap_unchecked() }
    }
}

/// Per-channel driver: each color plane runs through the same
/// single-channel routine independently.
impl ConvolveExt for Image<Rgb<f32>> {
    type Output = Self;

    fn convolve(&self, kernel: &Kernel) -> Self {
        let (width, height) = self.dimensions();
        let (w, h) = (width as usize, height as usize);

        let red: Vec<f32> = self.pixels().map(|p| p[0]).collect();
        let green: Vec<f32> = self.pixels().map(|p| p[1]).collect();
        let blue: Vec<f32> = self.pixels().map(|p| p[2]).collect();

        let red = convolve_plane(&red, w, h, kernel);
        let green = convolve_plane(&green, w, h, kernel);
        let blue = convolve_plane(&blue, w, h, kernel);

        ImageBuffer::from_fn(width, height, |x, y| {
            let i = y as usize * w + x as usize;
            Rgb([red[i], green[i], blue[i]])
        })
    }
}

/// Convolves one row-major plane, returning a fresh zero-initialized
/// buffer with only full-window positions filled in.
fn convolve_plane(src: &[f32], width: usize, height: usize, kernel: &Kernel) -> Vec<f32> {
    let mut out = vec![0.0f32; width * height];
    let size = kernel.size() as usize;
    let margin = kernel.margin() as usize;

    // Window origins stop one short of the last full window; the
    // masked border absorbs the difference.
    let window_rows = height.saturating_sub(size);
    let window_cols = width.saturating_sub(size);
    if window_rows == 0 || window_cols == 0 {
        return out;
    }

    let weights = kernel.weights();
    let computed = &mut out[margin * width..(margin + window_rows) * width];

    #[cfg(feature = "rayon")]
    computed
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(window_y, dst_row)| {
            convolve_window_row(src, dst_row, window_y, window_cols, width, size, margin, weights);
        });

    #[cfg(not(feature = "rayon"))]
    computed
        .chunks_mut(width)
        .enumerate()
        .for_each(|(window_y, dst_row)| {
            convolve_window_row(src, dst_row, window_y, window_cols, width, size, margin, weights);
        });

    out
}

/// Accumulates every window whose top row is `window_y` into the
/// output row centered under it.
#[allow(clippy::too_many_arguments)]
#[inline]
fn convolve_window_row(
    src: &[f32],
    dst_row: &mut [f32],
    window_y: usize,
    window_cols: usize,
    width: usize,
    size: usize,
    margin: usize,
    weights: &[f32],
) {
    for window_x in 0..window_cols {
        let mut acc = 0.0f32;
        for kernel_y in 0..size {
            let src_run = &src[(window_y + kernel_y) * width + window_x..][..size];
            let weight_run = &weights[kernel_y * size..][..size];
            for (pixel, weight) in src_run.iter().zip(weight_run) {
                acc += pixel * weight;
            }
        }
        dst_row[window_x + margin] = acc;
    }
}
