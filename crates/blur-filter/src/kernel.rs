/// Kernel radius in standard deviations, the weights past this are negligible.
const SPREAD: f32 = 3.0;

/// Largest sigma a kernel is built for, larger values are clamped to it.
pub(crate) const MAX_SIGMA: f32 = 100.0;

/// A normalised 1D Gaussian kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<f32>,
}

impl Kernel {
    /// Build the kernel for `sigma`, or `None` if `sigma` would not blur.
    pub fn gaussian(sigma: f32) -> Option<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return None;
        }

        let sigma = sigma.min(MAX_SIGMA);
        let half_width = (sigma * SPREAD).ceil() as isize;
        let denominator = 2.0 * sigma * sigma;

        let mut weights: Vec<f32> = (-half_width..=half_width)
            .map(|offset| {
                let offset = offset as f32;
                (-(offset * offset) / denominator).exp()
            })
            .collect();

        let total: f32 = weights.iter().sum();
        for weight in weights.iter_mut() {
            *weight /= total;
        }

        Some(Self { weights })
    }

    /// Number of taps either side of the centre.
    pub fn half_width(&self) -> usize {
        self.weights.len() / 2
    }

    /// `(offset, weight)` for every tap, from the most negative offset.
    pub fn taps(&self) -> impl Iterator<Item = (isize, f32)> + '_ {
        let half_width = self.half_width() as isize;

        self.weights
            .iter()
            .enumerate()
            .map(move |(index, weight)| (index as isize - half_width, *weight))
    }
}
