use ndarray::{s, Array1};
use crate::transforms::error::{TransformError, TransformResult};
/// Relative tolerance used when comparing an instant against its mirror image.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;
/// Strictly increasing, finite sample instants.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    instants: Array1<f64>,
}
impl TimeGrid {
    pub fn new(instants: impl Into<Array1<f64>>) -> TransformResult<Self> {
        let instants = instants.into();
        for (index, &t) in instants.iter().enumerate() {
            if !t.is_finite() {
                return Err(TransformError::NonFiniteInstant { index });
            }
            if index > 0 {
                let previous = instants[index - 1];
                if t <= previous {
                    return Err(TransformError::NonIncreasingGrid {
                        index,
                        previous,
                        current: t,
                    });
                }
            }
        }
        Ok(Self { instants })
    }
    /// `samples` evenly spaced instants from `start` to `end`, both included.
    ///
    /// The upper half is measured back from `end`, so `linspace(-a, a, n)` is
    /// exactly symmetric about zero.
    pub fn linspace(start: f64, end: f64, samples: usize) -> TransformResult<Self> {
        if !start.is_finite() {
            return Err(TransformError::NonFiniteInstant { index: 0 });
        }
        if !end.is_finite() {
            return Err(TransformError::NonFiniteInstant {
                index: samples.saturating_sub(1),
            });
        }
        let instants = match samples {
            0 => Array1::zeros(0),
            1 => Array1::from_elem(1, start),
            n => {
                let step = (end - start) / (n - 1) as f64;
                Array1::from_shape_fn(n, |i| {
                    if 2 * i + 1 == n {
                        0.5 * (start + end)
                    } else if 2 * i < n {
                        start + step * i as f64
                    } else {
                        end - step * (n - 1 - i) as f64
                    }
                })
            }
        };
        Self::new(instants)
    }
    pub fn len(&self) -> usize {
        self.instants.len()
    }
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }
    pub fn first(&self) -> Option<f64> {
        self.instants.first().copied()
    }
    pub fn last(&self) -> Option<f64> {
        self.instants.last().copied()
    }
    pub fn values(&self) -> &Array1<f64> {
        &self.instants
    }
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        self.instants.iter().copied()
    }
    pub fn to_vec(&self) -> Vec<f64> {
        self.instants.to_vec()
    }
    /// Common spacing when every step matches it within `rel_tol`.
    pub fn uniform_step(&self, rel_tol: f64) -> Option<f64> {
        let n = self.len();
        if n < 2 {
            return None;
        }
        let step = (self.instants[n - 1] - self.instants[0]) / (n - 1) as f64;
        let uniform = self
            .instants
            .windows(2)
            .into_iter()
            .all(|pair| ((pair[1] - pair[0]) - step).abs() <= rel_tol * step.abs());
        uniform.then_some(step)
    }
    /// Checks `t[i] == -t[N-1-i]` for every index.
    pub fn ensure_symmetric_about_zero(&self) -> TransformResult<()> {
        let mirrored = self.instants.slice(s![..;-1]);
        for (index, (&left, &right)) in self.instants.iter().zip(mirrored.iter()).enumerate() {
            let tol = SYMMETRY_TOLERANCE * left.abs().max(1.0);
            if (left + right).abs() > tol {
                return Err(TransformError::AsymmetricGrid {
                    index,
                    left,
                    right: -right,
                });
            }
        }
        Ok(())
    }
    pub fn is_symmetric_about_zero(&self) -> bool {
        self.ensure_symmetric_about_zero().is_ok()
    }
    /// Grid of `-t`, reversed so it stays increasing.
    pub fn mirrored(&self) -> Self {
        Self {
            instants: self.instants.slice(s![..;-1]).mapv(|t| -t),
        }
    }
}
