use log::{debug, warn};
use ndarray::{s, Array1};
use serde::Serialize;
use crate::transforms::error::{TransformError, TransformResult};
use crate::transforms::generator::Generator;
use crate::transforms::grid::TimeGrid;
use crate::transforms::signal::Signal;
/// Relative tolerance for "whole multiple of the sampling interval" checks.
const GRID_ALIGNMENT_TOLERANCE: f64 = 1e-9;
/// What to do when a generator evaluates to NaN or infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Fail with [`TransformError::Domain`] at the first offending sample.
    #[default]
    Reject,
    /// Keep the non-finite sample and log a warning.
    Propagate,
}
/// Samples `f` at every instant of `grid`, in grid order.
pub fn construct(grid: &TimeGrid, f: impl Fn(f64) -> f64) -> TransformResult<Signal> {
    construct_with(grid, f, NonFinitePolicy::Reject)
}
pub fn construct_with(
    grid: &TimeGrid,
    f: impl Fn(f64) -> f64,
    policy: NonFinitePolicy,
) -> TransformResult<Signal> {
    let mut amplitudes = Vec::with_capacity(grid.len());
    for (index, t) in grid.iter().enumerate() {
        let value = f(t);
        if !value.is_finite() {
            match policy {
                NonFinitePolicy::Reject => {
                    return Err(TransformError::Domain { index, t, value });
                }
                NonFinitePolicy::Propagate => {
                    warn!("non-finite sample kept at index {index} (t = {t}): {value}");
                }
            }
        }
        amplitudes.push(value);
    }
    Ok(Signal::from_parts(grid.clone(), Array1::from(amplitudes)))
}
/// Samples a generator on `grid`, rejecting non-finite values.
pub fn sample(generator: &Generator, grid: &TimeGrid) -> TransformResult<Signal> {
    construct(grid, |t| generator.evaluate(t))
}
/// `x(t - t0)` re-evaluated on the same grid. Positive `t0` delays.
pub fn shift(generator: &Generator, grid: &TimeGrid, t0: f64) -> TransformResult<Signal> {
    debug!("shift {} by {t0} over {} samples", generator.label(), grid.len());
    sample(&generator.shifted(t0)?, grid)
}
/// `x(t - t0)` for `t0 >= 0`: the signal moves right.
pub fn delay(generator: &Generator, grid: &TimeGrid, t0: f64) -> TransformResult<Signal> {
    shift(generator, grid, non_negative_offset(t0)?)
}
/// `x(t + t0)` for `t0 >= 0`: the signal moves left.
pub fn advance(generator: &Generator, grid: &TimeGrid, t0: f64) -> TransformResult<Signal> {
    shift(generator, grid, -non_negative_offset(t0)?)
}
fn non_negative_offset(t0: f64) -> TransformResult<f64> {
    if !t0.is_finite() {
        return Err(TransformError::NonFiniteShift(t0));
    }
    if t0 < 0.0 {
        return Err(TransformError::NegativeOffset(t0));
    }
    Ok(t0)
}
/// Shift by reindexing stored samples.
///
/// Only defined when the grid is uniform and `t0` is a whole number `k` of
/// sampling intervals; then `y[i] = x[i - k]`. Samples shifted in from outside
/// the grid are zero.
pub fn shift_samples(signal: &Signal, t0: f64) -> TransformResult<Signal> {
    if !t0.is_finite() {
        return Err(TransformError::NonFiniteShift(t0));
    }
    if t0 == 0.0 {
        return Ok(signal.clone());
    }
    let step = signal
        .grid()
        .uniform_step(GRID_ALIGNMENT_TOLERANCE)
        .ok_or(TransformError::NonUniformGrid)?;
    let steps = t0 / step;
    let k = steps.round();
    if (steps - k).abs() > GRID_ALIGNMENT_TOLERANCE * steps.abs().max(1.0) {
        return Err(TransformError::ShiftNotOnGrid { offset: t0, step });
    }
    if k.abs() >= signal.len() as f64 {
        debug!("shift of {k} samples leaves the grid (t0 = {t0}, dt = {step})");
        return Ok(Signal::from_parts(
            signal.grid().clone(),
            Array1::zeros(signal.len()),
        ));
    }
    let k = k as i64;
    debug!("reindexing shift by {k} samples (t0 = {t0}, dt = {step})");
    let source = signal.amplitudes();
    let n = signal.len() as i64;
    let shifted = Array1::from_shape_fn(signal.len(), |i| {
        let from = i as i64 - k;
        if (0..n).contains(&from) {
            source[from as usize]
        } else {
            0.0
        }
    });
    Ok(Signal::from_parts(signal.grid().clone(), shifted))
}
/// Reverses the amplitudes over the same grid. Applying it twice is the identity.
pub fn reflect(signal: &Signal) -> Signal {
    Signal::from_parts(
        signal.grid().clone(),
        signal.amplitudes().slice(s![..;-1]).to_owned(),
    )
}
/// True `x(-t)`: reverses the amplitudes and mirrors the grid as well.
pub fn reflect_about_origin(signal: &Signal) -> Signal {
    Signal::from_parts(
        signal.grid().mirrored(),
        signal.amplitudes().slice(s![..;-1]).to_owned(),
    )
}
/// `x(a t)` re-evaluated on the same grid. `a > 1` compresses, `0 < a < 1` expands.
pub fn scale(generator: &Generator, grid: &TimeGrid, a: f64) -> TransformResult<Signal> {
    debug!("scale {} by {a} over {} samples", generator.label(), grid.len());
    sample(&generator.scaled(a)?, grid)
}
/// Even and odd parts of a signal on a zero-symmetric grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    pub even: Signal,
    pub odd: Signal,
}
impl Decomposition {
    /// `even + odd`, which reproduces the decomposed signal.
    pub fn recombine(&self) -> TransformResult<Signal> {
        self.even.add(&self.odd)
    }
}
pub fn even_odd_decompose(signal: &Signal) -> TransformResult<Decomposition> {
    signal.grid().ensure_symmetric_about_zero()?;
    let x = signal.amplitudes();
    let flipped = x.slice(s![..;-1]);
    let even = (x + &flipped) * 0.5;
    let odd = (x - &flipped) * 0.5;
    Ok(Decomposition {
        even: Signal::from_parts(signal.grid().clone(), even),
        odd: Signal::from_parts(signal.grid().clone(), odd),
    })
}
/// Parity of a signal under time reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Symmetry {
    Even,
    Odd,
    /// Only the zero signal is both.
    Both,
    Neither,
}
pub fn classify_symmetry(signal: &Signal, tol: f64) -> TransformResult<Symmetry> {
    signal.grid().ensure_symmetric_about_zero()?;
    let reflected = reflect(signal);
    let even = reflected.approx_eq(signal, tol);
    let odd = reflected.approx_eq(&signal.negated(), tol);
    Ok(match (even, odd) {
        (true, true) => Symmetry::Both,
        (true, false) => Symmetry::Even,
        (false, true) => Symmetry::Odd,
        (false, false) => Symmetry::Neither,
    })
}
