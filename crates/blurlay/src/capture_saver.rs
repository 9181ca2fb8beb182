use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use image::{ExtendedColorType, ImageEncoder, ImageError, codecs::jpeg::JpegEncoder};
use screen_capture::{BYTES_PER_PIXEL, Bitmap};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to create file:\n{0}")]
    CreateFile(#[source] io::Error),

    #[error("Failed to encode image:\n{0}")]
    Encode(#[from] ImageError),

    #[error("Failed to write file:\n{0}")]
    Write(#[source] io::Error),
}

/// Write `bitmap` to `path` as a JPEG, replacing any existing file. JPEG has
/// no alpha channel so alpha is dropped.
pub fn save_capture(bitmap: &Bitmap, path: &Path, quality: u8) -> Result<(), SaveError> {
    let rgb: Vec<u8> = bitmap
        .as_raw()
        .chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect();

    let file = File::create(path).map_err(SaveError::CreateFile)?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality).write_image(
        &rgb,
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgb8,
    )?;

    writer.flush().map_err(SaveError::Write)?;

    Ok(())
}
