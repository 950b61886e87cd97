use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use cnvrs_core::utils::get_dynamic_reader_w_stdin;
use cnvrs_io::{create_output, filter_zero_coverage};

pub fn run_dropzero(matches: &ArgMatches) -> Result<()> {
    let input_path = matches
        .get_one::<String>("input")
        .expect("--input is required");
    let output_path = matches.get_one::<String>("output");

    let reader = get_dynamic_reader_w_stdin(Path::new(input_path))
        .with_context(|| format!("Failed to open coverage file: {}", input_path))?;
    let mut out = create_output(output_path.map(Path::new))
        .context("Failed to open output")?;

    let stats = filter_zero_coverage(reader, &mut out)
        .with_context(|| format!("Failed to filter {}", input_path))?;
    out.finish().context("Failed to finish output")?;

    info!(
        "Kept {} rows, removed {} zero-coverage rows",
        stats.kept, stats.dropped
    );

    Ok(())
}
