use std::time::Instant;

use blur_filter::blur;
use screen_capture::{Bitmap, CaptureSource};
use tracing::{debug, info, info_span, warn};

use crate::{capture_saver::save_capture, report_error::AppError, settings::Settings};

/// The blurred capture, ready to be shown.
#[derive(Debug)]
pub struct Prepared {
    pub filtered: Bitmap,
    pub origin: [i32; 2],
}

/// Capture the configured display, blur it and save the result.
///
/// Only the capture can fail, a failed save is logged and the capture is
/// still returned to be shown.
pub fn prepare(source: &impl CaptureSource, settings: &Settings) -> Result<Prepared, AppError> {
    let capture = {
        let _span = info_span!("Capture").entered();
        let start = Instant::now();

        let capture = source.capture(settings.display())?;

        debug!("Capture took {:?}", start.elapsed());
        capture
    };

    let filtered = {
        let _span = info_span!("Blur").entered();
        let start = Instant::now();

        let radius = settings.blur_radius();
        let filtered = blur(&capture.bitmap, radius);

        debug!("Blur with radius {} took {:?}", radius.0, start.elapsed());
        filtered
    };

    {
        let _span = info_span!("Save").entered();
        let path = &settings.output_path;

        match save_capture(&filtered, path, settings.jpeg_quality()) {
            Ok(()) => info!("Saved blurred capture to {}", path.display()),
            Err(error) => warn!(
                "Could not save blurred capture to {}, continuing:\n{error}",
                path.display()
            ),
        }
    }

    Ok(Prepared {
        filtered,
        origin: capture.origin,
    })
}
