use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use circle_pack::io::ext_repr::ExtCircleRow;
use circle_pack::io::export;
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::PanelConfig;

pub mod cli;
pub mod output;

pub fn read_config(path: &Path) -> Result<PanelConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("incorrect config file format: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open json file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write json file: {}", path.display()))?;

    info!("[IO] json written to {}", display_path(path));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {}", display_path(path));
    Ok(())
}

pub fn write_png(png: &[u8], path: &Path) -> Result<()> {
    fs::write(path, png).with_context(|| format!("could not write png file: {}", path.display()))?;
    info!("[IO] png written to {}", display_path(path));
    Ok(())
}

pub fn write_csv(rows: &[ExtCircleRow], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open csv file: {}", path.display()))?;
    export::write_csv(rows, BufWriter::new(file))
        .with_context(|| format!("could not write csv file: {}", path.display()))?;
    info!("[IO] csv written to {}", display_path(path));
    Ok(())
}

fn display_path(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("time: {}", jiff::Timestamp::now());
    Ok(())
}
