use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::views::slice::SliceView;
use crate::views::trellis::TrellisView;

pub const ARTIFACT_FORMAT: &str = "svg";
pub const DEFAULT_SIZE: (u32, u32) = (1200, 800);

const POINT_ALPHA: f64 = 0.8;
const POINT_SIZE: i32 = 4;

pub type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Owns the drawing surface shared by consecutive renders.
pub struct RenderContext {
    output_dir: PathBuf,
    size: (u32, u32),
    surface: String,
}

/// Exclusive hold on the surface for one render. Clears it on acquire and
/// again on drop, whatever the outcome.
struct SurfaceGuard<'a> {
    surface: &'a mut String,
}

impl<'a> SurfaceGuard<'a> {
    fn acquire(surface: &'a mut String) -> Self {
        surface.clear();
        SurfaceGuard { surface }
    }
}

impl Drop for SurfaceGuard<'_> {
    fn drop(&mut self) {
        self.surface.clear();
    }
}

impl RenderContext {
    pub fn new<P: Into<PathBuf>>(output_dir: P, size: (u32, u32)) -> Self {
        RenderContext {
            output_dir: output_dir.into(),
            size,
            surface: String::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", name, ARTIFACT_FORMAT))
    }

    /// True when no drawing is left on the surface.
    pub fn is_clear(&self) -> bool {
        self.surface.is_empty()
    }

    /// Acquires the surface, runs `draw` on a white canvas, writes
    /// `<name>.svg` and releases the surface.
    pub fn render<F>(&mut self, name: &str, draw: F) -> Result<PathBuf>
    where
        F: FnOnce(&Canvas<'_>) -> Result<()>,
    {
        let path = self.artifact_path(name);
        let size = self.size;
        let mut guard = SurfaceGuard::acquire(&mut self.surface);

        {
            let root = SVGBackend::with_string(&mut *guard.surface, size).into_drawing_area();
            root.fill(&WHITE)?;
            draw(&root)?;
            root.present()?;
        }

        fs::write(&path, guard.surface.as_bytes())?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

fn time_ceiling(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0f64, f64::max).max(1.0) * 1.1
}

fn series_color(index: usize) -> RGBAColor {
    Palette99::pick(index).to_rgba()
}

/// Line chart of `min_time_ns` against the free axis, one line per algorithm.
pub fn draw_slice(root: &Canvas<'_>, view: &SliceView) -> Result<()> {
    let points = || view.lines.iter().flat_map(|line| line.points.iter());
    let (x_min, x_max) = padded_range(points().map(|&(x, _)| x as f64));
    let y_max = time_ceiling(points().map(|&(_, y)| y as f64));

    let mut chart = ChartBuilder::on(root)
        .caption(&view.name, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(view.free_axis.name())
        .y_desc("Time (ns)")
        .draw()?;

    for (i, line) in view.lines.iter().enumerate() {
        let color = series_color(i);
        chart
            .draw_series(LineSeries::new(
                line.points.iter().map(|&(x, y)| (x as f64, y as f64)),
                color.stroke_width(2),
            ))?
            .label(line.algorithm.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2)));
    }

    if !view.lines.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.mix(0.25))
            .draw()?;
    }

    Ok(())
}

/// Grid of scatter panels, rows by the row axis and columns by the column
/// axis, points coloured by algorithm.
pub fn draw_trellis(root: &Canvas<'_>, view: &TrellisView) -> Result<()> {
    if view.records.is_empty() {
        root.titled(&format!("{} (no data)", view.name), ("sans-serif", 24))?;
        return Ok(());
    }

    let area = root.titled(&view.name, ("sans-serif", 24))?;
    let panels = area.split_evenly((view.rows.len(), view.columns.len()));

    let (x_min, x_max) = padded_range(view.records.iter().map(|r| r.get(view.x_axis) as f64));
    let y_max = time_ceiling(view.records.iter().map(|r| r.min_time_ns as f64));

    for (r, &row) in view.rows.iter().enumerate() {
        for (c, &column) in view.columns.iter().enumerate() {
            let panel = &panels[r * view.columns.len() + c];
            let mut chart = ChartBuilder::on(panel)
                .caption(
                    format!("{} = {}, {} = {}", view.row_axis, row, view.column_axis, column),
                    ("sans-serif", 14),
                )
                .margin(6)
                .x_label_area_size(28)
                .y_label_area_size(60)
                .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?;

            chart
                .configure_mesh()
                .x_desc(view.x_axis.name())
                .y_desc("min_time_ns")
                .draw()?;

            for (i, algorithm) in view.algorithms.iter().enumerate() {
                let style = series_color(i).mix(POINT_ALPHA).filled();
                let annotation = chart.draw_series(
                    view.panel(row, column)
                        .filter(|record| &record.algorithm == algorithm)
                        .map(|record| {
                            Circle::new(
                                (record.get(view.x_axis) as f64, record.min_time_ns as f64),
                                POINT_SIZE,
                                style,
                            )
                        }),
                )?;
                if r == 0 && c == 0 {
                    annotation
                        .label(algorithm.clone())
                        .legend(move |(x, y)| Circle::new((x, y), POINT_SIZE, style));
                }
            }

            if r == 0 && c == 0 {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(WHITE.mix(0.85))
                    .border_style(BLACK.mix(0.25))
                    .draw()?;
            }
        }
    }

    Ok(())
}
