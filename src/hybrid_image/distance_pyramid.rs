use image::imageops::{self, FilterType};
use image::Rgb;

use crate::error::PyramidError;
use crate::hybrid_image::gaussian_kernel::Kernel;
use crate::Image;

/// Trait for rendering the "viewing distance" staircase of a hybrid
/// image: the same picture at successively halved resolutions, laid
/// out side by side on one canvas.
pub trait DistancePyramidExt {
    /// Builds the pyramid canvas.
    ///
    /// The convolution border is trimmed off first (offset
    /// `size / 2`, trimming `size` pixels per axis in total), then the
    /// full-resolution tile is placed at the origin and `steps` halved
    /// copies follow it, each starting where the previous tile ended
    /// horizontally and dropping by half the placed tile's height.
    /// The canvas is exactly wide enough for the first `steps` terms
    /// of the halving series, so the last tile is clipped at the
    /// right edge.
    ///
    /// # Errors
    ///
    /// * `PyramidError::ImageTooSmall` - if the image is not strictly
    ///   larger than the kernel on both axes
    fn distance_pyramid(&self, kernel: &Kernel, steps: u32) -> Result<Self, PyramidError>
    where
        Self: Sized;
}

impl DistancePyramidExt for Image<Rgb<f32>> {
    fn distance_pyramid(&self, kernel: &Kernel, steps: u32) -> Result<Self, PyramidError> {
        let (width, height) = self.dimensions();
        let size = kernel.size();
        if width <= size || height <= size {
            return Err(PyramidError::ImageTooSmall {
                width,
                height,
                kernel_size: size,
            });
        }

        let margin = kernel.margin();
        let base = imageops::crop_imm(self, margin, margin, width - size, height - size).to_image();
        let (base_width, base_height) = base.dimensions();

        let mut canvas_width = base_width;
        let mut divisor = 2;
        for _ in 1..steps {
            canvas_width += base_width / divisor;
            divisor *= 2;
        }

        let mut canvas: Self = Image::new(canvas_width, base_height);
        imageops::overlay(&mut canvas, &base, 0, 0);

        let mut tile = base;
        let mut cursor_x = i64::from(base_width);
        let mut cursor_y = i64::from(base_height / 2);
        for _ in 0..steps {
            let (tile_width, tile_height) = tile.dimensions();
            if tile_width < 2 || tile_height < 2 {
                break;
            }
            // Halving resize is the platform primitive, not part of
            // the numeric core
            tile = imageops::resize(&tile, tile_width / 2, tile_height / 2, FilterType::Triangle);
            imageops::overlay(&mut canvas, &tile, cursor_x, cursor_y);
            cursor_x += i64::from(tile.width());
            cursor_y += i64::from(tile.height() / 2);
        }

        Ok(canvas)
    }
}
