use thiserror::Error;
/// Broad category of a [`TransformError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The generating function is undefined at a sample.
    Domain,
    /// A caller-supplied argument violates a precondition.
    InvalidArgument,
    /// Rendering or encoding a plot failed.
    Plot,
}
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("function undefined at sample {index} (t = {t}): evaluated to {value}")]
    Domain { index: usize, t: f64, value: f64 },
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("time instant {index} is not finite")]
    NonFiniteInstant { index: usize },
    #[error("time grid must be strictly increasing: t[{index}] = {current} after {previous}")]
    NonIncreasingGrid {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("scale factor must be positive and finite, got {0}")]
    NonPositiveScale(f64),
    #[error("delay/advance magnitude must be non-negative, got {0}")]
    NegativeOffset(f64),
    #[error("shift offset must be finite, got {0}")]
    NonFiniteShift(f64),
    #[error("grid is not symmetric about zero: t[{index}] = {left}, mirrored instant = {right}")]
    AsymmetricGrid { index: usize, left: f64, right: f64 },
    #[error("signals are sampled on different grids (first difference at index {index})")]
    GridMismatch { index: usize },
    #[error("operation requires a uniformly spaced grid")]
    NonUniformGrid,
    #[error("shift {offset} is not a whole multiple of the sampling interval {step}")]
    ShiftNotOnGrid { offset: f64, step: f64 },
    #[error("insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },
    #[error("nothing to plot: no signals or an empty signal")]
    EmptyPlot,
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Domain { .. } => ErrorKind::Domain,
            TransformError::Plot(_) => ErrorKind::Plot,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
/// Result type for signal transformations.
pub type TransformResult<T> = Result<T, TransformError>;
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for TransformError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        TransformError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for TransformError {
    fn from(value: image::ImageError) -> Self {
        TransformError::Plot(value.to_string())
    }
}
