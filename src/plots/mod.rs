use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::aggregate::aggregate;
use crate::dataset::{load_samples, Record};
use crate::error::Result;
use crate::render::{draw_slice, draw_trellis, RenderContext};
use crate::statistics::{describe_records, summary_table};
use crate::views::slice::slice_specs;
use crate::views::trellis::trellis_specs;

/// Which view families to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotSelection {
    pub trellis: bool,
    pub slices: bool,
}

/// Loads raw samples, reduces them and renders the selected views.
/// Returns the artifact paths in render order.
pub fn generate_plots<P: AsRef<Path>>(
    input_path: P,
    selection: PlotSelection,
    ctx: &mut RenderContext,
) -> Result<Vec<PathBuf>> {
    let samples = load_samples(input_path.as_ref())?;
    let records = aggregate(&samples);
    info!(
        "Loaded {} samples from {}, {} configurations after reduction",
        samples.len(),
        input_path.as_ref().display(),
        records.len()
    );

    let mut artifacts = Vec::new();
    if selection.slices {
        artifacts.extend(render_slices(&records, ctx)?);
    }
    if selection.trellis {
        artifacts.extend(render_trellises(&records, ctx)?);
    }
    Ok(artifacts)
}

pub fn render_slices(records: &[Record], ctx: &mut RenderContext) -> Result<Vec<PathBuf>> {
    let mut artifacts = Vec::new();
    for spec in slice_specs() {
        let view = spec.select(records);
        if view.records.is_empty() {
            warn!("Slice '{}' selected no rows", view.name);
        }
        info!("Slice plot of\n{}", summary_table(&describe_records(&view.records)));
        artifacts.push(ctx.render(&spec.name, |root| draw_slice(root, &view))?);
    }
    Ok(artifacts)
}

pub fn render_trellises(records: &[Record], ctx: &mut RenderContext) -> Result<Vec<PathBuf>> {
    let mut artifacts = Vec::new();
    for spec in trellis_specs() {
        let view = spec.select(records);
        if view.records.is_empty() {
            warn!("Trellis '{}' selected no rows", view.name);
        }
        info!("Trellis plot of\n{}", summary_table(&describe_records(&view.records)));
        artifacts.push(ctx.render(spec.name, |root| draw_trellis(root, &view))?);
    }
    Ok(artifacts)
}
