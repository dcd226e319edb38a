use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use panels::config::PanelConfig;
use panels::io;
use panels::io::cli::Cli;
use panels::panel::{generate_panels, log_summary, write_panel};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PanelConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }
    if args.monochrome {
        config.monochrome = true;
        config.svg_draw_options.monochrome = true;
    }

    info!("Successfully parsed PanelConfig: {config:?}");

    let stem = args
        .config_file
        .as_deref()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or("panel");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {}", args.output_folder.display())
        })?;
    }

    let (placement_config, panels) = generate_panels(&config, args.n_panels)?;

    for panel in &panels {
        log_summary(panel, &placement_config.canvas);
        let panel_stem = format!("{stem}_{}", panel.index);
        write_panel(
            panel,
            &config,
            &placement_config.canvas,
            &args.output_folder,
            &panel_stem,
        )?;
    }

    Ok(())
}
