use screenshots::Screen;
use tracing::{debug, info};

use crate::{Bitmap, Capture, CaptureSource, DisplayIndex, Error};

/// Captures displays through the cross platform `screenshots` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenshotsProvider;

impl CaptureSource for ScreenshotsProvider {
    fn capture(&self, index: DisplayIndex) -> Result<Capture, Error> {
        let mut screens = Screen::all().map_err(|e| Error::EnumerateDisplays(e.into()))?;
        debug!("Found {} display(s)", screens.len());

        // The platform order does not always start with the primary display.
        primary_first(&mut screens, |screen| screen.display_info.is_primary);

        let count = screens.len();
        let screen = screens
            .into_iter()
            .nth(index.0 as usize)
            .ok_or(Error::NoDisplay { index, count })?;

        let image = screen.capture().map_err(|e| Error::Capture {
            index,
            source: e.into(),
        })?;

        // `screenshots` uses its own `image` version, move the raw bytes across.
        let (width, height) = image.dimensions();
        let bitmap = Bitmap::from_raw(width, height, image.into_raw())?;

        let origin = [screen.display_info.x, screen.display_info.y];
        info!(
            "Captured display {index} ({}x{} at {},{}, primary: {})",
            width, height, origin[0], origin[1], screen.display_info.is_primary
        );

        Ok(Capture { bitmap, origin })
    }
}

/// Move the primary display to the front, the others keep their order.
fn primary_first<T>(screens: &mut [T], is_primary: impl Fn(&T) -> bool) {
    screens.sort_by_key(|screen| !is_primary(screen));
}
