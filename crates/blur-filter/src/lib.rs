//! # Blur Filter
//! Gaussian blur for captured bitmaps.
//!

mod kernel;

use kernel::Kernel;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};
use screen_capture::{BYTES_PER_PIXEL, Bitmap};
use tracing::debug;

/// Strength of the blur, the standard deviation of the Gaussian in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurRadius(pub f32);

impl BlurRadius {
    /// Blur strength used when none is configured.
    pub const DEFAULT: Self = Self(5.0);

    /// Strongest blur applied, larger radii blur as much as this.
    pub const MAX: Self = Self(kernel::MAX_SIGMA);
}

impl Default for BlurRadius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Blur every channel of `bitmap`, returning a new bitmap of the same size.
///
/// The kernel is separable, applied horizontally then vertically, and
/// samples past the edges repeat the nearest edge pixel. A radius that is not
/// positive returns an unchanged copy, one above [`BlurRadius::MAX`] is
/// clamped to it.
pub fn blur(bitmap: &Bitmap, radius: BlurRadius) -> Bitmap {
    let Some(kernel) = Kernel::gaussian(radius.0) else {
        debug!("Blur radius {} is a no-op", radius.0);
        return bitmap.clone();
    };

    let width = bitmap.width() as usize;
    let height = bitmap.height() as usize;
    let stride = bitmap.row_stride();

    // Horizontal pass, kept as f32 so rounding only happens once.
    let mut horizontal = vec![0.0_f32; stride * height];
    horizontal
        .par_chunks_mut(stride)
        .zip(bitmap.as_raw().par_chunks(stride))
        .for_each(|(output_row, input_row)| {
            for x in 0..width {
                let mut sum = [0.0_f32; BYTES_PER_PIXEL];

                for (offset, weight) in kernel.taps() {
                    let source = clamp_index(x, offset, width) * BYTES_PER_PIXEL;
                    for (channel, total) in sum.iter_mut().enumerate() {
                        *total += weight * f32::from(input_row[source + channel]);
                    }
                }

                output_row[x * BYTES_PER_PIXEL..(x + 1) * BYTES_PER_PIXEL].copy_from_slice(&sum);
            }
        });

    // Vertical pass
    let mut output = bitmap.clone();
    output
        .as_raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, output_row)| {
            for x in 0..width {
                let mut sum = [0.0_f32; BYTES_PER_PIXEL];

                for (offset, weight) in kernel.taps() {
                    let source = clamp_index(y, offset, height) * stride + x * BYTES_PER_PIXEL;
                    for (channel, total) in sum.iter_mut().enumerate() {
                        *total += weight * horizontal[source + channel];
                    }
                }

                for (channel, total) in sum.iter().enumerate() {
                    output_row[x * BYTES_PER_PIXEL + channel] = total.round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    output
}

/// `index + offset` clamped to `0..len`.
fn clamp_index(index: usize, offset: isize, len: usize) -> usize {
    index.saturating_add_signed(offset).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::clamp_index;

    #[test]
    fn clamps_to_edges() {
        assert_eq!(clamp_index(0, -3, 10), 0);
        assert_eq!(clamp_index(2, -1, 10), 1);
        assert_eq!(clamp_index(9, 4, 10), 9);
        assert_eq!(clamp_index(0, 5, 1), 0);
    }
}
