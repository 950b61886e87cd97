use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cnvrs_io::{create_output, read_merged_calls_file, read_windows_file};
use cnvrs_overlaprs::aggregate_windows;

use crate::config::load_config;

pub fn run_windows(matches: &ArgMatches) -> Result<()> {
    let cnvs_path = matches
        .get_one::<String>("cnvs")
        .expect("--cnvs is required");
    let bed_path = matches
        .get_one::<String>("bed")
        .expect("--bed is required");
    let output_path = matches.get_one::<String>("output");

    let mut config = load_config(matches.get_one::<String>("config"))?;
    if let Some(chromosomes) = matches.get_many::<String>("chromosomes") {
        config.chromosomes = chromosomes.cloned().collect();
    }
    if let Some(digits) = matches.get_one::<u32>("digits") {
        config.digits = *digits;
    }
    config.validate()?;

    let samples = read_merged_calls_file(cnvs_path)
        .with_context(|| format!("Failed to read merged calls from {}", cnvs_path))?;
    let windows = read_windows_file(bed_path)
        .with_context(|| format!("Failed to read windows from {}", bed_path))?;

    let sample_order: Vec<String> = match matches.get_many::<String>("samples") {
        Some(names) => names.cloned().collect(),
        None => samples.sample_names(),
    };

    info!(
        "Assigning {} samples to {} windows",
        sample_order.len(),
        windows.len()
    );

    let table = aggregate_windows(
        &config.chromosomes,
        &windows,
        &samples,
        &sample_order,
        config.digits,
    )?;

    let mut out = create_output(output_path.map(Path::new))
        .context("Failed to open output")?;
    write!(out, "{}", table)?;
    out.finish().context("Failed to finish output")?;

    info!("Wrote {} window rows", table.rows.len());

    Ok(())
}
