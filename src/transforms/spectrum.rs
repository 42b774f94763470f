use rustfft::{num_complex::Complex64, FftPlanner};
use crate::transforms::error::{TransformError, TransformResult};
use crate::transforms::signal::Signal;
/// Relative spacing tolerance for treating a grid as uniformly sampled.
const UNIFORM_TOLERANCE: f64 = 1e-6;
/// Single-sided magnitude spectrum of a uniformly sampled signal.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub sample_rate_hz: f64,
    pub frequencies_hz: Vec<f64>,
    pub magnitudes: Vec<f64>,
}
impl Spectrum {
    pub fn of(signal: &Signal) -> TransformResult<Self> {
        let n = signal.len();
        if n < 2 {
            return Err(TransformError::InsufficientSamples { needed: 2, got: n });
        }
        let dt = signal
            .grid()
            .uniform_step(UNIFORM_TOLERANCE)
            .ok_or(TransformError::NonUniformGrid)?;
        let sample_rate_hz = 1.0 / dt;
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);
        let mut buffer: Vec<Complex64> = signal
            .amplitudes()
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        fft.process(&mut buffer);
        let bins = n / 2;
        let frequencies_hz = (0..bins)
            .map(|k| k as f64 * sample_rate_hz / n as f64)
            .collect();
        let magnitudes = buffer
            .iter()
            .take(bins)
            .map(|c| c.norm() / n as f64)
            .collect();
        Ok(Self {
            sample_rate_hz,
            frequencies_hz,
            magnitudes,
        })
    }
    /// Frequency of the strongest non-DC bin.
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| self.frequencies_hz[k])
    }
    /// Width of one frequency bin.
    pub fn resolution_hz(&self) -> f64 {
        self.frequencies_hz.get(1).copied().unwrap_or(self.sample_rate_hz)
    }
}
