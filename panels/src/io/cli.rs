use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER", default_value = "output")]
    pub output_folder: PathBuf,
    /// Overrides the seed of the config file
    #[arg(short, long)]
    pub seed: Option<u32>,
    /// Number of panels to generate
    #[arg(short, long, default_value_t = 1)]
    pub n_panels: usize,
    /// Draw all circles in black, in both the PNG and the SVG
    #[arg(short, long)]
    pub monochrome: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
