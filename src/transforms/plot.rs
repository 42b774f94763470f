use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use crate::transforms::error::{TransformError, TransformResult};
use crate::transforms::signal::Signal;
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlotKind {
    /// Continuous-time view.
    #[default]
    Line,
    /// Discrete-time view: one marker per sample on a vertical stem.
    Stem,
}
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub kind: PlotKind,
    /// Draw caption, tick labels and legend. Needs a system font.
    pub labelled: bool,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            title: "Signals".into(),
            kind: PlotKind::Line,
            labelled: true,
            background: WHITE,
            palette: vec![BLUE, RED, GREEN, MAGENTA, CYAN, BLACK],
        }
    }
}
/// Renders labelled signals over their own grids and returns PNG bytes.
pub fn render_signals_png(
    signals: &[(&str, &Signal)],
    style: &PlotStyle,
) -> TransformResult<Vec<u8>> {
    if signals.is_empty() || signals.iter().any(|(_, s)| s.is_empty()) {
        return Err(TransformError::EmptyPlot);
    }
    let (x_min, x_max) = bounds(signals.iter().flat_map(|(_, s)| s.grid().iter()));
    let (y_min, y_max) = bounds(
        signals
            .iter()
            .flat_map(|(_, s)| s.amplitudes().iter().copied())
            .filter(|v| v.is_finite()),
    );
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let label_area = if style.labelled { 40 } else { 0 };
        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, label_area + 5)
            .set_label_area_size(LabelAreaPosition::Bottom, label_area);
        if style.labelled {
            builder.caption(&style.title, ("sans-serif", 20).into_font());
        }
        let mut chart = builder.build_cartesian_2d(x_min..x_max, y_min..y_max)?;
        let mut mesh = chart.configure_mesh();
        mesh.light_line_style(BLACK.mix(0.1));
        if style.labelled {
            mesh.x_desc("Time [s]").y_desc("Amplitude [-]");
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;
        for (idx, (label, signal)) in signals.iter().enumerate() {
            let color = style.palette[idx % style.palette.len()];
            let points: Vec<(f64, f64)> = signal.points().filter(|(_, v)| v.is_finite()).collect();
            let series = match style.kind {
                PlotKind::Line => chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?,
                PlotKind::Stem => {
                    chart.draw_series(points.iter().map(|&(t, v)| {
                        PathElement::new(vec![(t, 0.0), (t, v)], color.stroke_width(1))
                    }))?;
                    chart.draw_series(
                        points
                            .iter()
                            .map(|&(t, v)| Circle::new((t, v), 3, color.filled())),
                    )?
                }
            };
            series
                .label(label.to_string())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        if style.labelled {
            chart
                .configure_series_labels()
                .border_style(BLACK.mix(0.2))
                .background_style(style.background.mix(0.8))
                .draw()?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
/// Padded `(min, max)` of the finite values; a flat or empty input gets a unit range.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> TransformResult<Vec<u8>> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| TransformError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::generator::Generator;
    use crate::transforms::grid::TimeGrid;
    use crate::transforms::ops::{reflect, sample};
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    fn unlabelled(kind: PlotKind) -> PlotStyle {
        PlotStyle {
            width: 200,
            height: 100,
            kind,
            labelled: false,
            ..PlotStyle::default()
        }
    }
    #[test]
    fn renders_line_and_stem_plots() {
        let grid = TimeGrid::linspace(-20.0, 20.0, 50).unwrap();
        let original = sample(&Generator::sigmoid(), &grid).unwrap();
        let reflected = reflect(&original);
        let signals = [("original", &original), ("reflected", &reflected)];
        for kind in [PlotKind::Line, PlotKind::Stem] {
            let png = render_signals_png(&signals, &unlabelled(kind)).unwrap();
            assert!(png.starts_with(&PNG_SIGNATURE));
        }
    }
    #[test]
    fn empty_input_is_rejected() {
        let style = unlabelled(PlotKind::Line);
        assert!(matches!(
            render_signals_png(&[], &style).unwrap_err(),
            TransformError::EmptyPlot
        ));
    }
    #[test]
    fn bounds_handle_flat_and_non_finite_data() {
        assert_eq!(bounds([2.0, 2.0].into_iter()), (1.0, 3.0));
        assert_eq!(bounds(std::iter::empty()), (-1.0, 1.0));
        let (lo, hi) = bounds([0.0, 10.0].into_iter());
        assert!(lo < 0.0 && hi > 10.0);
    }
}
