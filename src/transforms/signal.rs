use ndarray::Array1;
use serde::{Deserialize, Serialize};
use crate::transforms::error::{TransformError, TransformResult};
use crate::transforms::grid::TimeGrid;
/// Amplitudes paired index-for-index with the instants of a [`TimeGrid`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SignalRepr", into = "SignalRepr")]
pub struct Signal {
    grid: TimeGrid,
    amplitudes: Array1<f64>,
}
/// Plain `(grid, amplitudes)` pair handed to presentation layers.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct SignalRepr {
    grid: Vec<f64>,
    amplitudes: Vec<f64>,
}
impl TryFrom<SignalRepr> for Signal {
    type Error = TransformError;
    fn try_from(repr: SignalRepr) -> Result<Self, Self::Error> {
        Signal::new(TimeGrid::new(repr.grid)?, repr.amplitudes)
    }
}
impl From<Signal> for SignalRepr {
    fn from(signal: Signal) -> Self {
        SignalRepr {
            grid: signal.grid.to_vec(),
            amplitudes: signal.amplitudes.to_vec(),
        }
    }
}
impl Signal {
    pub fn new(grid: TimeGrid, amplitudes: impl Into<Array1<f64>>) -> TransformResult<Self> {
        let amplitudes = amplitudes.into();
        if amplitudes.len() != grid.len() {
            return Err(TransformError::LengthMismatch {
                expected: grid.len(),
                actual: amplitudes.len(),
            });
        }
        Ok(Self { grid, amplitudes })
    }
    /// Caller guarantees `amplitudes.len() == grid.len()`.
    pub(crate) fn from_parts(grid: TimeGrid, amplitudes: Array1<f64>) -> Self {
        debug_assert_eq!(grid.len(), amplitudes.len());
        Self { grid, amplitudes }
    }
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }
    pub fn amplitudes(&self) -> &Array1<f64> {
        &self.amplitudes
    }
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
    /// `(t, x(t))` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().zip(self.amplitudes.iter().copied())
    }
    pub fn into_parts(self) -> (TimeGrid, Array1<f64>) {
        (self.grid, self.amplitudes)
    }
    pub fn negated(&self) -> Self {
        Self::from_parts(self.grid.clone(), self.amplitudes.mapv(|x| -x))
    }
    pub fn add(&self, other: &Signal) -> TransformResult<Self> {
        self.ensure_same_grid(other)?;
        Ok(Self::from_parts(
            self.grid.clone(),
            &self.amplitudes + &other.amplitudes,
        ))
    }
    pub fn sub(&self, other: &Signal) -> TransformResult<Self> {
        self.ensure_same_grid(other)?;
        Ok(Self::from_parts(
            self.grid.clone(),
            &self.amplitudes - &other.amplitudes,
        ))
    }
    /// Largest pointwise amplitude difference; grids must match.
    ///
    /// NaN if any difference is NaN, so non-finite samples never compare equal.
    pub fn max_abs_diff(&self, other: &Signal) -> TransformResult<f64> {
        self.ensure_same_grid(other)?;
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, |max, d| if d.is_nan() || d > max { d } else { max }))
    }
    /// Amplitude-wise comparison. Signals on different grids are never equal.
    pub fn approx_eq(&self, other: &Signal, tol: f64) -> bool {
        self.max_abs_diff(other)
            .map(|diff| diff <= tol)
            .unwrap_or(false)
    }
    fn ensure_same_grid(&self, other: &Signal) -> TransformResult<()> {
        if self.len() != other.len() {
            return Err(TransformError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        match self
            .grid
            .iter()
            .zip(other.grid.iter())
            .position(|(a, b)| a != b)
        {
            Some(index) => Err(TransformError::GridMismatch { index }),
            None => Ok(()),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn grid3() -> TimeGrid {
        TimeGrid::new(vec![-1.0, 0.0, 1.0]).unwrap()
    }
    #[test]
    fn length_invariant_is_checked() {
        let err = Signal::new(grid3(), vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            TransformError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }
    #[test]
    fn arithmetic_is_pointwise() {
        let a = Signal::new(grid3(), vec![1.0, 2.0, 3.0]).unwrap();
        let b = Signal::new(grid3(), vec![0.5, -2.0, 1.0]).unwrap();
        assert_eq!(a.add(&b).unwrap().amplitudes().to_vec(), vec![1.5, 0.0, 4.0]);
        assert_eq!(a.sub(&b).unwrap().amplitudes().to_vec(), vec![0.5, 4.0, 2.0]);
        assert_eq!(a.negated().amplitudes().to_vec(), vec![-1.0, -2.0, -3.0]);
        assert!((a.max_abs_diff(&b).unwrap() - 4.0).abs() < 1e-12);
    }
    #[test]
    fn different_grids_do_not_combine() {
        let a = Signal::new(grid3(), vec![1.0, 2.0, 3.0]).unwrap();
        let other_grid = TimeGrid::new(vec![-1.0, 0.5, 1.0]).unwrap();
        let b = Signal::new(other_grid, vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            a.add(&b).unwrap_err(),
            TransformError::GridMismatch { index: 1 }
        ));
        assert!(!a.approx_eq(&b, 1.0));
    }
    #[test]
    fn nan_differences_are_not_swallowed() {
        let a = Signal::new(grid3(), vec![1.0, f64::NAN, 1.0]).unwrap();
        let b = Signal::new(grid3(), vec![1.0, 123.0, 1.0]).unwrap();
        assert!(a.max_abs_diff(&b).unwrap().is_nan());
        assert!(!a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&a, 1e-9));
        // a NaN early in the sequence is not overwritten by later finite differences
        let c = Signal::new(grid3(), vec![f64::NAN, 0.0, 0.0]).unwrap();
        let d = Signal::new(grid3(), vec![0.0, 5.0, 9.0]).unwrap();
        assert!(c.max_abs_diff(&d).unwrap().is_nan());
    }
    #[test]
    fn serializes_as_grid_and_amplitudes() {
        let a = Signal::new(grid3(), vec![1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["grid"], serde_json::json!([-1.0, 0.0, 1.0]));
        assert_eq!(json["amplitudes"], serde_json::json!([1.0, 2.0, 3.0]));
        let back: Signal = serde_json::from_value(json).unwrap();
        assert_eq!(back, a);
    }
    #[test]
    fn deserialization_revalidates() {
        let bad = serde_json::json!({ "grid": [0.0, 1.0], "amplitudes": [1.0] });
        assert!(serde_json::from_value::<Signal>(bad).is_err());
        let unsorted = serde_json::json!({ "grid": [1.0, 0.0], "amplitudes": [1.0, 2.0] });
        assert!(serde_json::from_value::<Signal>(unsorted).is_err());
    }
}
