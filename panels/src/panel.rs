use std::path::Path;

use anyhow::{Context, Result};
use circle_pack::coverage::CoverageReport;
use circle_pack::entities::{Canvas, PlacementResult};
use circle_pack::io::export::{export_report, export_rows};
use circle_pack::io::import::import;
use circle_pack::io::raster::render_png;
use circle_pack::io::svg::placement_to_svg;
use circle_pack::placement::{PlacementConfig, place_batch};
use itertools::Itertools;
use log::info;
use thousands::Separable;

use crate::config::PanelConfig;
use crate::io;
use crate::io::output::PanelOutput;

/// A single generated panel
#[derive(Clone, Debug)]
pub struct Panel {
    pub index: usize,
    /// Seed the panel was generated with, `None` if it was seeded from entropy
    pub seed: Option<u32>,
    pub result: PlacementResult,
}

/// Seeds of `n_panels` consecutive panels, starting from `prng_seed`.
pub fn panel_seeds(prng_seed: Option<u32>, n_panels: usize) -> Vec<Option<u32>> {
    (0..n_panels)
        .map(|i| prng_seed.map(|s| s.wrapping_add(i as u32)))
        .collect_vec()
}

/// Imports the configuration and generates `n_panels` independent panels.
/// Fails on the first invalid configuration, before any file is written.
pub fn generate_panels(
    config: &PanelConfig,
    n_panels: usize,
) -> Result<(PlacementConfig, Vec<Panel>)> {
    let placement_config = import(&config.to_request()).context("invalid panel configuration")?;
    let seeds = panel_seeds(config.prng_seed, n_panels);

    let panels = place_batch(&placement_config, &seeds)
        .into_iter()
        .zip(seeds)
        .enumerate()
        .map(|(index, (result, seed))| {
            let result = result.with_context(|| format!("could not generate panel {index}"))?;
            Ok(Panel { index, seed, result })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((placement_config, panels))
}

/// Logs the coverage summary of a panel
pub fn log_summary(panel: &Panel, canvas: &Canvas) {
    let report = CoverageReport::new(&panel.result, canvas);
    info!(
        "[PANELS] panel {}: {}/{} circles placed, {} samples, perforation ratio: {:.2}%",
        panel.index,
        report.total_placed.separate_with_commas(),
        report.total_requested.separate_with_commas(),
        panel.result.n_samples.separate_with_commas(),
        report.coverage_pct
    );
    let counts = report
        .counts_by_label
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .join(", ");
    info!("[PANELS] panel {}: {}", panel.index, counts);
}

/// Writes `{stem}.png`, `{stem}.svg`, `{stem}.csv` and `{stem}.json` for a panel
/// into `output_folder`.
pub fn write_panel(
    panel: &Panel,
    config: &PanelConfig,
    canvas: &Canvas,
    output_folder: &Path,
    stem: &str,
) -> Result<()> {
    let placed = &panel.result.placed;

    let png = render_png(placed, canvas, config.monochrome)?;
    io::write_png(&png, &output_folder.join(format!("{stem}.png")))?;

    let title = format!("panel {}", panel.index);
    let svg = placement_to_svg(placed, canvas, config.svg_draw_options, &title);
    io::write_svg(&svg, &output_folder.join(format!("{stem}.svg")))?;

    let rows = export_rows(placed, canvas, panel.result.gap);
    io::write_csv(&rows, &output_folder.join(format!("{stem}.csv")))?;

    let output = PanelOutput {
        config: config.clone(),
        report: export_report(&panel.result, canvas, panel.seed),
    };
    io::write_json(&output, &output_folder.join(format!("{stem}.json")))?;

    Ok(())
}
