// src/transforms/mod.rs
pub mod error;
pub mod generator;
pub mod grid;
pub mod ops;
pub mod plot;
pub mod signal;
pub mod spectrum;
pub use error::{ErrorKind, TransformError, TransformResult};
pub use generator::{phase_of_shift, Generator};
pub use grid::TimeGrid;
pub use ops::{
    advance, classify_symmetry, construct, construct_with, delay, even_odd_decompose, reflect,
    reflect_about_origin, sample, scale, shift, shift_samples, Decomposition, NonFinitePolicy,
    Symmetry,
};
pub use plot::{render_signals_png, PlotKind, PlotStyle};
pub use signal::Signal;
pub use spectrum::Spectrum;
