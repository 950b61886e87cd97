use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cnvrs_io::{IngestOptions, RecordLayout, create_output, read_cnvnator_file, write_rows};
use cnvrs_overlaprs::pairwise_merge;

use crate::config::load_config;

pub fn run_merge(matches: &ArgMatches) -> Result<()> {
    let input_1 = matches
        .get_one::<String>("input-1")
        .expect("--input-1 is required");
    let input_2 = matches
        .get_one::<String>("input-2")
        .expect("--input-2 is required");
    let sample = matches
        .get_one::<String>("sample")
        .expect("--sample is required");
    let output_path = matches.get_one::<String>("output");

    let mut config = load_config(matches.get_one::<String>("config"))?;
    if let Some(threshold) = matches.get_one::<f64>("threshold") {
        config.significance_threshold = *threshold;
    }
    if matches.get_flag("keep-chr-prefix") {
        config.strip_chr_prefix = false;
    }
    config.validate()?;

    let layout = match matches.get_one::<String>("layout") {
        Some(s) => s.parse::<RecordLayout>().map_err(anyhow::Error::msg)?,
        None => RecordLayout::default(),
    };
    let options = IngestOptions {
        layout,
        ..IngestOptions::from(&config)
    };

    let first = read_cnvnator_file(input_1, &options)
        .with_context(|| format!("Failed to read CNV calls from {}", input_1))?;
    let second = read_cnvnator_file(input_2, &options)
        .with_context(|| format!("Failed to read CNV calls from {}", input_2))?;

    info!(
        "Merging {} calls from {} with {} calls from {}",
        first.len(),
        input_1,
        second.len(),
        input_2
    );

    let mut out = create_output(output_path.map(Path::new))
        .context("Failed to open output")?;
    let n = write_rows(&mut out, pairwise_merge(sample, &first, &second))?;
    out.finish().context("Failed to finish output")?;

    info!("Wrote {} overlapping calls for sample {}", n, sample);

    Ok(())
}
