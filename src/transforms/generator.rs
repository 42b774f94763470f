//! Closed-form signal generators.
//!
//! A [`Generator`] is the continuous-time function a [`Signal`] was sampled
//! from. Keeping it around lets shift and scale re-evaluate the function at
//! the transformed abscissas instead of guessing values between samples.
//!
//! [`Signal`]: crate::transforms::Signal
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;
use crate::transforms::error::{TransformError, TransformResult};
type RealFn = dyn Fn(f64) -> f64 + Send + Sync;
/// Shareable real-to-real function with a human readable label.
#[derive(Clone)]
pub struct Generator {
    label: String,
    func: Arc<RealFn>,
}
impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
impl Generator {
    pub fn new(label: impl Into<String>, func: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }
    /// Logistic sigmoid `1 / (1 + e^-t)`.
    pub fn sigmoid() -> Self {
        Self::new("sigmoid", |t| 1.0 / (1.0 + (-t).exp()))
    }
    /// `cos(2 pi f t)`, an even signal.
    pub fn cosine(freq_hz: f64) -> Self {
        let w = 2.0 * PI * freq_hz;
        Self::new(format!("cos(2pi*{freq_hz}*t)"), move |t| (w * t).cos())
    }
    /// `sin(2 pi f t)`, an odd signal.
    pub fn sine(freq_hz: f64) -> Self {
        let w = 2.0 * PI * freq_hz;
        Self::new(format!("sin(2pi*{freq_hz}*t)"), move |t| (w * t).sin())
    }
    /// Two-sided exponential `e^-|t|`, even despite decaying both ways.
    pub fn two_sided_exponential() -> Self {
        Self::new("exp(-|t|)", |t| (-t.abs()).exp())
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn evaluate(&self, t: f64) -> f64 {
        (self.func)(t)
    }
    /// `x(t - t0)`: positive offsets delay, negative offsets advance.
    pub fn shifted(&self, t0: f64) -> TransformResult<Self> {
        if !t0.is_finite() {
            return Err(TransformError::NonFiniteShift(t0));
        }
        let inner = Arc::clone(&self.func);
        Ok(Self {
            label: format!("{}[t - {t0}]", self.label),
            func: Arc::new(move |t| inner(t - t0)),
        })
    }
    /// `x(-t)`.
    pub fn reflected(&self) -> Self {
        let inner = Arc::clone(&self.func);
        Self {
            label: format!("{}[-t]", self.label),
            func: Arc::new(move |t| inner(-t)),
        }
    }
    /// `x(a t)`; `a` must be positive and finite.
    pub fn scaled(&self, a: f64) -> TransformResult<Self> {
        if !(a.is_finite() && a > 0.0) {
            return Err(TransformError::NonPositiveScale(a));
        }
        let inner = Arc::clone(&self.func);
        Ok(Self {
            label: format!("{}[{a}*t]", self.label),
            func: Arc::new(move |t| inner(a * t)),
        })
    }
}
/// Phase `phi` such that `cos(2 pi f (t - t0)) == cos(2 pi f t - phi)`.
pub fn phase_of_shift(freq_hz: f64, t0: f64) -> f64 {
    2.0 * PI * freq_hz * t0
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn closed_forms() {
        assert!((Generator::sigmoid().evaluate(0.0) - 0.5).abs() < 1e-15);
        assert!((Generator::cosine(0.25).evaluate(2.0) + 1.0).abs() < 1e-12);
        assert!((Generator::sine(0.25).evaluate(1.0) - 1.0).abs() < 1e-12);
        let exp = Generator::two_sided_exponential();
        assert_eq!(exp.evaluate(-1.5), exp.evaluate(1.5));
    }
    #[test]
    fn shift_moves_the_abscissa() {
        let sigmoid = Generator::sigmoid();
        let delayed = sigmoid.shifted(5.0).unwrap();
        assert_eq!(delayed.evaluate(5.0), sigmoid.evaluate(0.0));
        let advanced = sigmoid.shifted(-5.0).unwrap();
        assert_eq!(advanced.evaluate(-5.0), sigmoid.evaluate(0.0));
        assert!(sigmoid.shifted(f64::NAN).is_err());
    }
    #[test]
    fn shift_of_cosine_is_a_phase() {
        let freq = 1.0;
        let t0 = 0.1;
        let phi = phase_of_shift(freq, t0);
        let delayed = Generator::cosine(freq).shifted(t0).unwrap();
        for t in [-1.0, -0.3, 0.0, 0.42, 1.0] {
            let expected = (2.0 * PI * freq * t - phi).cos();
            assert!((delayed.evaluate(t) - expected).abs() < 1e-12);
        }
    }
    #[test]
    fn scale_rejects_non_positive_factors() {
        let g = Generator::sigmoid();
        for a in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                g.scaled(a),
                Err(TransformError::NonPositiveScale(_))
            ));
        }
        let fast = g.scaled(2.0).unwrap();
        assert_eq!(fast.evaluate(1.5), g.evaluate(3.0));
    }
    #[test]
    fn reflection_and_labels() {
        let g = Generator::sigmoid().reflected();
        assert_eq!(g.evaluate(2.0), Generator::sigmoid().evaluate(-2.0));
        assert_eq!(g.label(), "sigmoid[-t]");
        assert!(format!("{g:?}").contains("sigmoid[-t]"));
    }
}
