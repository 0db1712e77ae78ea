use image::Pixel;

use crate::Image;

/// Trait for blanking the border band a convolution could not fill.
///
/// Convolution only writes positions with a complete kernel
/// neighborhood, so every image derived from at least one convolution
/// carries an invalid margin. This operation zeroes it in place.
pub trait MaskBordersExt {
    /// Sets every channel value in the top and bottom
    /// `kernel_height / 2 + 1` rows and the left and right
    /// `kernel_width / 2 + 1` columns to `0.0`.
    ///
    /// The band is one row/column wider than the strict convolution
    /// margin; the extra unit also covers the last window the
    /// convolver's loop bound skips. Bands wider than the image are
    /// clamped, so a kernel at least as large as the image blanks it
    /// entirely.
    fn mask_borders(&mut self, kernel_width: u32, kernel_height: u32);
}

impl<P> MaskBordersExt for Image<P>
where
    P: Pixel<Subpixel = f32>,
{
    fn mask_borders(&mut self, kernel_width: u32, kernel_height: u32) {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let band_rows = (kernel_height / 2 + 1).min(height);
        let band_cols = (kernel_width / 2 + 1).min(width);

        for row in 0..band_rows {
            for x in 0..width {
                zero_pixel(self, x, row);
                zero_pixel(self, x, height - 1 - row);
            }
        }

        for col in 0..band_cols {
            for y in 0..height {
                zero_pixel(self, col, y);
                zero_pixel(self, width - 1 - col, y);
            }
        }
    }
}

#[inline]
fn zero_pixel<P>(image: &mut Image<P>, x: u32, y: u32)
where
    P: Pixel<Subpixel = f32>,
{
    image.get_pixel_mut(x, y).channels_mut().fill(0.0);
}
