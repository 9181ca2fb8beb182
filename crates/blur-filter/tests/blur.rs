//! Tests for blur

use blur_filter::{BlurRadius, blur};
use rand::{Rng, SeedableRng, rngs::StdRng};
use screen_capture::Bitmap;

fn noise(width: u32, height: u32, seed: u64) -> Bitmap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bytes = vec![0_u8; width as usize * height as usize * 4];
    rng.fill(bytes.as_mut_slice());

    Bitmap::from_raw(width, height, bytes).unwrap()
}

fn variance(bitmap: &Bitmap) -> f64 {
    let values: Vec<f64> = bitmap.as_raw().iter().map(|v| f64::from(*v)).collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[test]
fn preserves_dimensions() {
    for (width, height) in [(1, 1), (1, 9), (13, 1), (64, 48), (37, 101)] {
        let source = noise(width, height, 1);
        let blurred = blur(&source, BlurRadius::DEFAULT);

        assert_eq!(blurred.size(), [width, height]);
        assert_eq!(blurred.as_raw().len(), source.as_raw().len());
    }
}

#[test]
fn is_deterministic() {
    let source = noise(97, 61, 42);

    let first = blur(&source, BlurRadius(3.0));
    let second = blur(&source, BlurRadius(3.0));

    assert_eq!(first, second);
}

#[test]
fn leaves_source_untouched() {
    let source = noise(32, 32, 7);
    let copy = source.clone();

    let blurred = blur(&source, BlurRadius::DEFAULT);

    assert_eq!(source, copy);
    assert_ne!(blurred, source);
}

#[test]
fn uniform_image_is_unchanged() {
    let red = [255, 0, 0, 255];
    let source = Bitmap::from_pixel(800, 600, red).unwrap();

    for radius in [0.5, 1.0, 5.0, 12.5] {
        let blurred = blur(&source, BlurRadius(radius));
        assert!(
            blurred.pixels().all(|pixel| pixel == red),
            "radius {radius} changed a uniform image"
        );
    }

    let grey = Bitmap::from_pixel(17, 3, [127, 128, 129, 200]).unwrap();
    assert_eq!(blur(&grey, BlurRadius(2.0)), grey);
}

#[test]
fn non_positive_radius_copies() {
    let source = noise(20, 10, 3);

    assert_eq!(blur(&source, BlurRadius(0.0)), source);
    assert_eq!(blur(&source, BlurRadius(-4.0)), source);
}

#[test]
fn single_pixel() {
    let source = Bitmap::from_pixel(1, 1, [10, 20, 30, 40]).unwrap();

    let blurred = blur(&source, BlurRadius::DEFAULT);

    assert_eq!(blurred.pixel(0, 0), Some([10, 20, 30, 40]));
}

#[test]
fn smooths_noise() {
    let source = noise(64, 64, 99);

    let blurred = blur(&source, BlurRadius(2.0));

    assert!(variance(&blurred) < variance(&source) / 4.0);
}

#[test]
fn spreads_an_impulse_symmetrically() {
    let mut source = Bitmap::from_pixel(21, 21, [0, 0, 0, 255]).unwrap();
    let centre = (10 * 21 + 10) * 4;
    source.as_raw_mut()[centre..centre + 3].copy_from_slice(&[255, 255, 255]);

    let blurred = blur(&source, BlurRadius(1.5));

    let centre_value = blurred.pixel(10, 10).unwrap()[0];
    assert!(centre_value > 0 && centre_value < 255);

    for distance in 1..=4 {
        let left = blurred.pixel(10 - distance, 10).unwrap();
        let right = blurred.pixel(10 + distance, 10).unwrap();
        let up = blurred.pixel(10, 10 - distance).unwrap();
        let down = blurred.pixel(10, 10 + distance).unwrap();

        assert_eq!(left, right);
        assert_eq!(up, down);
        assert_eq!(left, up);
        assert!(left[0] <= centre_value);
    }

    // Alpha was uniform and stays so.
    assert!(blurred.pixels().all(|pixel| pixel[3] == 255));
}

#[test]
fn huge_radius_is_clamped() {
    let source = Bitmap::from_pixel(4, 4, [30, 60, 90, 255]).unwrap();
    assert_eq!(blur(&source, BlurRadius(1e30)), source);

    let noisy = noise(16, 8, 5);
    assert_eq!(
        blur(&noisy, BlurRadius(1e30)),
        blur(&noisy, BlurRadius::MAX)
    );
}
