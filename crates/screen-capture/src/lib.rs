//! # Screen Capture
//! Reads the contents of a display into a [`Bitmap`].
//!

mod bitmap;
mod screenshots_provider;

pub use bitmap::{BYTES_PER_PIXEL, Bitmap, BitmapError};
pub use screenshots_provider::ScreenshotsProvider;

use thiserror::Error;

/// Index of a display, with the primary display first and the rest in the
/// platform's enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub u32);

impl DisplayIndex {
    /// The primary display.
    pub const PRIMARY: Self = Self(0);
}

impl Default for DisplayIndex {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl core::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The contents of a display at the moment it was captured.
#[derive(Debug)]
pub struct Capture {
    /// The display's pixels.
    pub bitmap: Bitmap,

    /// Top left corner of the display in desktop coordinates.
    pub origin: [i32; 2],
}

/// Something that can read the contents of a display.
pub trait CaptureSource {
    /// Capture the full contents of the display at `index`.
    fn capture(&self, index: DisplayIndex) -> Result<Capture, Error>;
}

/// Errors from taking a capture.
#[derive(Debug, Error)]
pub enum Error {
    /// The platform could not list its displays.
    #[error("Failed to enumerate displays:\n{0}")]
    EnumerateDisplays(#[source] Box<dyn core::error::Error + Send + Sync>),

    /// There is no display at the requested index.
    #[error("No display {index} exists, {count} display(s) found")]
    NoDisplay {
        /// Requested display.
        index: DisplayIndex,
        /// Number of displays the platform reported.
        count: usize,
    },

    /// The platform failed to read the display.
    #[error("Failed to capture display {index}:\n{source}")]
    Capture {
        /// Display that was being captured.
        index: DisplayIndex,
        /// Platform error.
        #[source]
        source: Box<dyn core::error::Error + Send + Sync>,
    },

    /// The platform returned pixels that do not form a valid bitmap.
    #[error("Capture was malformed:\n{0}")]
    Malformed(#[from] BitmapError),
}
