// src/main.rs
use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use signal_transforms::config::DemoConfig;
use signal_transforms::transforms::{
    classify_symmetry, even_odd_decompose, phase_of_shift, reflect, render_signals_png, sample,
    scale, shift, shift_samples, Generator, PlotKind, PlotStyle, Signal, Spectrum, Symmetry,
    TimeGrid, TransformError,
};
#[derive(Debug, Serialize)]
struct DemoReport {
    shift: ShiftReport,
    reflection: ReflectionReport,
    scaling: ScalingReport,
    parity: Vec<ParityReport>,
    decomposition: DecompositionReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    plots: Vec<PlotReport>,
}
#[derive(Debug, Serialize)]
struct ShiftReport {
    generator: String,
    offset: f64,
    /// Phase the same offset applies to a cosine of `frequency_hz`.
    cosine_phase_rad: f64,
    /// Largest difference between reindexing and re-evaluation, when reindexing applies.
    reindex_max_diff: Option<f64>,
    reindex_error: Option<String>,
}
#[derive(Debug, Serialize)]
struct ReflectionReport {
    generator: String,
    involution_holds: bool,
    first: f64,
    first_reflected: f64,
}
#[derive(Debug, Serialize)]
struct ScalingReport {
    factor: f64,
    original_hz: Option<f64>,
    scaled_hz: Option<f64>,
}
#[derive(Debug, Serialize)]
struct ParityReport {
    generator: String,
    symmetry: Symmetry,
}
#[derive(Debug, Serialize)]
struct DecompositionReport {
    signal: Signal,
    even: Signal,
    odd: Signal,
    max_recombination_error: f64,
}
#[derive(Debug, Serialize)]
struct PlotReport {
    name: &'static str,
    png_bytes: usize,
}
struct Demo {
    config: DemoConfig,
    grid: TimeGrid,
}
impl Demo {
    fn new(config: DemoConfig) -> Result<Self> {
        let grid = config.grid.build().context("invalid demo grid")?;
        Ok(Self { config, grid })
    }
    fn run(&self) -> Result<DemoReport> {
        let mut plots = Vec::new();
        let shift = self.shift(&mut plots)?;
        let reflection = self.reflection(&mut plots)?;
        let scaling = self.scaling()?;
        let parity = self.parity()?;
        let decomposition = self.decomposition(&mut plots)?;
        Ok(DemoReport {
            shift,
            reflection,
            scaling,
            parity,
            decomposition,
            plots,
        })
    }
    fn shift(&self, plots: &mut Vec<PlotReport>) -> Result<ShiftReport> {
        let grid = self.config.shift_grid.build().context("invalid shift grid")?;
        let generator = Generator::sigmoid();
        let t0 = self.config.shift_offset;
        let original = sample(&generator, &grid)?;
        let shifted = shift(&generator, &grid, t0)?;
        info!("shifted {} by t0 = {t0}", generator.label());
        let (reindex_max_diff, reindex_error) = match shift_samples(&original, t0) {
            Ok(reindexed) => {
                let k = (t0 / grid.uniform_step(1e-9).unwrap_or(t0)).round() as i64;
                (Some(overlapping_diff(&reindexed, &shifted, k)), None)
            }
            Err(err @ (TransformError::ShiftNotOnGrid { .. } | TransformError::NonUniformGrid)) => {
                info!("sample reindexing not applicable: {err}");
                (None, Some(err.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        self.plot(plots, "shift", &[("original", &original), ("shifted", &shifted)])?;
        Ok(ShiftReport {
            generator: generator.label().to_string(),
            offset: t0,
            cosine_phase_rad: phase_of_shift(self.config.frequency_hz, t0),
            reindex_max_diff,
            reindex_error,
        })
    }
    fn reflection(&self, plots: &mut Vec<PlotReport>) -> Result<ReflectionReport> {
        let generator = Generator::sigmoid();
        let original = sample(&generator, &self.grid)?;
        let reflected = reflect(&original);
        info!("reflected {} over {} samples", generator.label(), original.len());
        self.plot(
            plots,
            "reflection",
            &[("original", &original), ("reflected", &reflected)],
        )?;
        Ok(ReflectionReport {
            generator: generator.label().to_string(),
            involution_holds: reflect(&reflected) == original,
            first: original.amplitudes()[0],
            first_reflected: reflected.amplitudes()[0],
        })
    }
    fn scaling(&self) -> Result<ScalingReport> {
        let a = self.config.scale_factor;
        let generator = Generator::cosine(self.config.frequency_hz);
        let original = Spectrum::of(&sample(&generator, &self.grid)?)?;
        let scaled = Spectrum::of(&scale(&generator, &self.grid, a)?)?;
        let report = ScalingReport {
            factor: a,
            original_hz: original.dominant_frequency(),
            scaled_hz: scaled.dominant_frequency(),
        };
        info!(
            "scaling by {a}: dominant frequency {:?} Hz -> {:?} Hz",
            report.original_hz, report.scaled_hz
        );
        Ok(report)
    }
    fn parity(&self) -> Result<Vec<ParityReport>> {
        let f = self.config.frequency_hz;
        [
            Generator::sigmoid(),
            Generator::cosine(f),
            Generator::two_sided_exponential(),
            Generator::sine(f),
        ]
        .into_iter()
        .map(|generator| -> Result<ParityReport> {
            let signal = sample(&generator, &self.grid)?;
            let symmetry = classify_symmetry(&signal, self.config.tolerance)?;
            info!("{} is {symmetry:?}", generator.label());
            Ok(ParityReport {
                generator: generator.label().to_string(),
                symmetry,
            })
        })
        .collect()
    }
    fn decomposition(&self, plots: &mut Vec<PlotReport>) -> Result<DecompositionReport> {
        let grid = TimeGrid::linspace(-1.0, 1.0, self.config.decomposition_samples)?;
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let amplitudes: Vec<f64> = (0..grid.len()).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let signal = Signal::new(grid, amplitudes)?;
        let parts = even_odd_decompose(&signal)?;
        let max_recombination_error = parts.recombine()?.max_abs_diff(&signal)?;
        info!("decomposed random signal, recombination error {max_recombination_error:e}");
        self.plot(
            plots,
            "decomposition",
            &[("signal", &signal), ("even", &parts.even), ("odd", &parts.odd)],
        )?;
        Ok(DecompositionReport {
            signal,
            even: parts.even,
            odd: parts.odd,
            max_recombination_error,
        })
    }
    fn plot(
        &self,
        plots: &mut Vec<PlotReport>,
        name: &'static str,
        signals: &[(&str, &Signal)],
    ) -> Result<()> {
        if !self.config.render_plots {
            return Ok(());
        }
        let style = PlotStyle {
            title: name.to_string(),
            kind: if name == "decomposition" {
                PlotKind::Stem
            } else {
                PlotKind::Line
            },
            ..PlotStyle::default()
        };
        let png = render_signals_png(signals, &style)
            .with_context(|| format!("failed to render {name} plot"))?;
        plots.push(PlotReport {
            name,
            png_bytes: png.len(),
        });
        Ok(())
    }
}
/// Largest difference on the samples both shift modes define, for a shift of `k` samples.
fn overlapping_diff(reindexed: &Signal, evaluated: &Signal, k: i64) -> f64 {
    let n = reindexed.len() as i64;
    (0..n)
        .filter(|i| (0..n).contains(&(i - k)))
        .map(|i| (reindexed.amplitudes()[i as usize] - evaluated.amplitudes()[i as usize]).abs())
        .fold(0.0, f64::max)
}
fn main() -> Result<()> {
    env_logger::init();
    let config = match std::env::args().nth(1) {
        Some(json) => DemoConfig::from_json_str(&json)?,
        None => DemoConfig::default(),
    };
    info!("running demos with {config:?}");
    let report = Demo::new(config)?.run()?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}
#[cfg(test)]
mod tests {
    use super::*;
    use signal_transforms::config::GridConfig;
    #[test]
    fn default_demo_reports_lecture_results() {
        let report = Demo::new(DemoConfig::default()).unwrap().run().unwrap();
        let parities: Vec<Symmetry> = report.parity.iter().map(|p| p.symmetry).collect();
        assert_eq!(
            parities,
            vec![Symmetry::Neither, Symmetry::Even, Symmetry::Even, Symmetry::Odd]
        );
        assert!(report.reflection.involution_holds);
        assert!(report.decomposition.max_recombination_error < 1e-9);
        assert_eq!(report.decomposition.even.len(), 20);
        // -5 is not a multiple of 40/49
        assert!(report.shift.reindex_error.is_some());
        assert!(report.plots.is_empty());
        let scaled = report.scaling.scaled_hz.unwrap();
        let original = report.scaling.original_hz.unwrap();
        assert!(scaled > original);
    }
    #[test]
    fn on_grid_shift_compares_both_modes() {
        let config = DemoConfig {
            shift_grid: GridConfig {
                start: -1.0,
                end: 1.0,
                samples: 201,
            },
            shift_offset: 0.05,
            ..DemoConfig::default()
        };
        let report = Demo::new(config).unwrap().run().unwrap();
        assert!(report.shift.reindex_error.is_none());
        assert!(report.shift.reindex_max_diff.unwrap() < 1e-9);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["parity"][3]["symmetry"], "odd");
        assert!(json.get("plots").is_none());
    }
}
