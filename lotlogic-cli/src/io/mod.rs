use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log};
use serde::{Deserialize, Serialize};
use svg::Document;

use lotlogic::io::ext_repr::ExtSite;

use crate::EPOCH;

pub mod cli;
pub mod output;

/// Input files contain either a single site or a batch of them
#[derive(Deserialize)]
#[serde(untagged)]
enum SiteFile {
    Batch { sites: Vec<ExtSite> },
    Single(Box<ExtSite>),
}

pub fn read_sites(path: &Path) -> Result<Vec<ExtSite>> {
    let file = File::open(path).with_context(|| format!("could not open site file: {path:?}"))?;
    let reader = BufReader::new(file);
    let site_file: SiteFile = serde_json::from_reader(reader)
        .with_context(|| format!("could not parse site file: {path:?}"))?;
    let sites = match site_file {
        SiteFile::Batch { sites } => sites,
        SiteFile::Single(site) => vec![*site],
    };
    info!("[IO] read {} site(s) from {path:?}", sites.len());
    Ok(sites)
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)?;
    info!(
        "[IO] plan written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("-")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("-")
    );
    Ok(())
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
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
