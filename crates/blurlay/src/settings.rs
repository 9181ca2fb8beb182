use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use blur_filter::BlurRadius;
use screen_capture::DisplayIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Optional settings file, read from the working directory.
pub const SETTINGS_FILE: &str = "blurlay.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display to capture, 0 is the primary display.
    pub display_index: u32,
    /// Standard deviation of the blur in pixels, 0 to 100.
    pub blur_radius: f32,
    /// Where the blurred capture is written.
    pub output_path: PathBuf,
    /// JPEG quality, 1 to 100.
    pub jpeg_quality: u8,
    /// Log at debug level.
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open settings file:\n{0}")]
    OpenFile(#[source] io::Error),

    #[error("Failed to read settings file:\n{0}")]
    ReadFile(#[source] io::Error),

    #[error("Failed to deserialize settings:\n{0}")]
    Deserialize(#[from] toml::de::Error),
}

impl Settings {
    /// Load [`SETTINGS_FILE`] from the working directory, `None` if it does not exist.
    pub fn try_load() -> Result<Option<Self>, LoadError> {
        Self::try_load_from(Path::new(SETTINGS_FILE))
    }

    pub fn try_load_from(path: &Path) -> Result<Option<Self>, LoadError> {
        let mut file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(LoadError::OpenFile(error)),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(LoadError::ReadFile)?;

        let settings: Self = toml::from_str(&contents)?;

        Ok(Some(settings))
    }

    pub fn display(&self) -> DisplayIndex {
        DisplayIndex(self.display_index)
    }

    /// The configured blur, clamped to `0..=`[`BlurRadius::MAX`]. NaN falls
    /// back to the default.
    pub fn blur_radius(&self) -> BlurRadius {
        let radius = self.blur_radius;

        if radius.is_nan() {
            warn!("blur_radius is not a number, using {}", BlurRadius::DEFAULT.0);
            return BlurRadius::DEFAULT;
        }

        let clamped = radius.clamp(0.0, BlurRadius::MAX.0);
        if clamped != radius {
            warn!("blur_radius {radius} is out of range, using {clamped}");
        }

        BlurRadius(clamped)
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_index: DisplayIndex::PRIMARY.0,
            blur_radius: BlurRadius::DEFAULT.0,
            output_path: PathBuf::from("out.jpg"),
            jpeg_quality: 95,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use blur_filter::BlurRadius;
    use screen_capture::DisplayIndex;

    use super::{LoadError, Settings};

    fn load(contents: &str) -> Settings {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurlay.toml");
        fs::write(&path, contents).unwrap();

        Settings::try_load_from(&path).unwrap().unwrap()
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();

        let settings = Settings::try_load_from(&dir.path().join("blurlay.toml")).unwrap();

        assert_eq!(settings, None);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurlay.toml");
        fs::write(&path, "blur_radius = 2.5\njpeg_quality = 250\n").unwrap();

        let settings = Settings::try_load_from(&path).unwrap().unwrap();

        assert_eq!(settings.blur_radius, 2.5);
        assert_eq!(settings.jpeg_quality(), 100);
        assert_eq!(settings.display_index, 0);
        assert_eq!(settings.output_path, Settings::default().output_path);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurlay.toml");
        fs::write(&path, "blur_radius = \"lots\"").unwrap();

        let error = Settings::try_load_from(&path).unwrap_err();

        assert!(matches!(error, LoadError::Deserialize(_)));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let settings = Settings::default();

        let toml_string = toml::to_string_pretty(&settings).unwrap();

        assert_eq!(toml::from_str::<Settings>(&toml_string).unwrap(), settings);
    }

    #[test]
    fn huge_radius_is_clamped() {
        let settings = load("blur_radius = 1e30\n");
        assert_eq!(settings.blur_radius(), BlurRadius::MAX);

        let settings = load("blur_radius = inf\n");
        assert_eq!(settings.blur_radius(), BlurRadius::MAX);
    }

    #[test]
    fn negative_radius_disables_the_blur() {
        let settings = load("blur_radius = -3.0\n");
        assert_eq!(settings.blur_radius(), BlurRadius(0.0));

        let settings = load("blur_radius = -inf\n");
        assert_eq!(settings.blur_radius(), BlurRadius(0.0));
    }

    #[test]
    fn nan_radius_uses_the_default() {
        let settings = load("blur_radius = nan\n");

        assert_eq!(settings.blur_radius(), BlurRadius::DEFAULT);
    }

    #[test]
    fn radius_in_range_is_kept() {
        let settings = load("blur_radius = 100.0\n");

        assert_eq!(settings.blur_radius(), BlurRadius(100.0));
    }

    #[test]
    fn display_index_is_passed_through() {
        // Whether the display exists is only known when capturing.
        let settings = load("display_index = 7\n");
        assert_eq!(settings.display(), DisplayIndex(7));
    }

    #[test]
    fn negative_display_index_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurlay.toml");
        fs::write(&path, "display_index = -1\n").unwrap();

        let error = Settings::try_load_from(&path).unwrap_err();

        assert!(matches!(error, LoadError::Deserialize(_)));
    }

    #[test]
    fn quality_is_at_least_one() {
        let settings = Settings {
            jpeg_quality: 0,
            ..Settings::default()
        };

        assert_eq!(settings.jpeg_quality(), 1);
    }
}
