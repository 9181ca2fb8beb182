use crate::Error;

/// Owned RGBA8 pixels waiting to be uploaded as a texture.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes from the start of one row to the start of the next.
    pub stride: usize,
    /// The pixel bytes, first row at the top.
    pub bytes: Vec<u8>,
}

impl PixelBuffer {
    /// A buffer with no padding between rows.
    pub fn tightly_packed(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width as usize * 4,
            bytes,
        }
    }

    /// `[width, height]`
    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    /// Checks the buffer can be uploaded as is, rows must be tightly packed RGBA8.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyBuffer {
                width: self.width,
                height: self.height,
            });
        }

        let packed_stride = self.width as usize * 4;
        if self.stride != packed_stride {
            return Err(Error::UnsupportedStride {
                stride: self.stride,
                expected: packed_stride,
            });
        }

        let expected = self.stride * self.height as usize;
        if self.bytes.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: self.bytes.len(),
            });
        }

        Ok(())
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::PixelBuffer;
    use crate::Error;

    #[test]
    fn accepts_tightly_packed() {
        for (width, height) in [(1, 1), (800, 600), (3, 7)] {
            let buffer = PixelBuffer::tightly_packed(
                width,
                height,
                vec![0; width as usize * height as usize * 4],
            );
            assert!(buffer.validate().is_ok(), "{width}x{height}");
        }
    }

    #[test]
    fn rejects_padded_rows() {
        let buffer = PixelBuffer {
            width: 3,
            height: 2,
            stride: 16,
            bytes: vec![0; 32],
        };

        assert!(matches!(
            buffer.validate(),
            Err(Error::UnsupportedStride {
                stride: 16,
                expected: 12
            })
        ));
    }

    #[test]
    fn rejects_short_stride() {
        let buffer = PixelBuffer {
            width: 4,
            height: 1,
            stride: 12,
            bytes: vec![0; 12],
        };

        assert!(matches!(
            buffer.validate(),
            Err(Error::UnsupportedStride { .. })
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        let buffer = PixelBuffer::tightly_packed(2, 2, vec![0; 12]);

        assert!(matches!(
            buffer.validate(),
            Err(Error::BufferSize {
                expected: 16,
                actual: 12
            })
        ));
    }

    #[test]
    fn rejects_empty() {
        let buffer = PixelBuffer::tightly_packed(0, 10, vec![]);

        assert!(matches!(buffer.validate(), Err(Error::EmptyBuffer { .. })));
    }
}
