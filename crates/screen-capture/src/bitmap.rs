use image::RgbaImage;
use thiserror::Error;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A tightly packed RGBA8 image, row-major with the first row at the top.
///
/// Both dimensions are non-zero and the buffer always holds exactly
/// `width * height * 4` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from raw RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::ZeroSize { width, height });
        }

        let expected = Self::byte_len(width, height);
        if pixels.len() != expected {
            return Err(BitmapError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap where every pixel is `pixel`.
    pub fn from_pixel(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::ZeroSize { width, height });
        }

        let pixels = pixel
            .iter()
            .copied()
            .cycle()
            .take(Self::byte_len(width, height))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `[width, height]`
    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    /// Bytes per row, always `width * 4`.
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// The pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let start = y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
        Some(pixel)
    }

    /// Iterate over every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
    }

    /// The raw RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// The raw RGBA8 bytes, mutably. The length is fixed so the dimensions stay valid.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the bitmap, returning the raw RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Convert into an [`image::RgbaImage`] without copying.
    pub fn into_image(self) -> RgbaImage {
        // The invariants on `Bitmap` are stricter than the ones `from_raw` checks.
        match RgbaImage::from_raw(self.width, self.height, self.pixels) {
            Some(image) => image,
            None => unreachable!("bitmap buffer always matches its dimensions"),
        }
    }

    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }
}

impl TryFrom<RgbaImage> for Bitmap {
    type Error = BitmapError;

    fn try_from(image: RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        Self::from_raw(width, height, image.into_raw())
    }
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Reasons raw parts cannot form a [`Bitmap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmapError {
    /// One of the dimensions was zero.
    #[error("Bitmap dimensions must be non-zero, got {width}x{height}")]
    ZeroSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The buffer length did not match `width * height * 4`.
    #[error("Bitmap buffer should be {expected} bytes but was {actual} bytes")]
    BufferSize {
        /// Bytes the dimensions require.
        expected: usize,
        /// Bytes provided.
        actual: usize,
    },
}
