mod config;
mod dropzero;
mod merge;
mod windows;

use std::time::Instant;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "cnvrs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Reconcile CNVnator copy-number calls across bin sizes and samples.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log progress to stderr (-v info, -vv debug); RUST_LOG takes precedence"),
        )
        .subcommand(merge::cli::create_merge_cli())
        .subcommand(windows::cli::create_windows_cli())
        .subcommand(dropzero::cli::create_dropzero_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        //
        // PAIRWISE MERGE
        //
        Some((merge::cli::MERGE_CMD, matches)) => {
            merge::handlers::run_merge(matches)?;
        }

        //
        // WINDOWED AGGREGATION
        //
        Some((windows::cli::WINDOWS_CMD, matches)) => {
            windows::handlers::run_windows(matches)?;
        }

        //
        // ZERO COVERAGE FILTER
        //
        Some((dropzero::cli::DROPZERO_CMD, matches)) => {
            dropzero::handlers::run_dropzero(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    let t0 = Instant::now();
    run(&matches)?;
    info!("Time elapsed: {:?}", t0.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::fs::read_to_string;
    use std::path::PathBuf;

    #[fixture]
    fn path_to_data() -> PathBuf {
        std::env::current_dir().unwrap().join("../tests/data")
    }

    fn run_args(args: &[&str]) -> Result<()> {
        let matches = build_parser().try_get_matches_from(args)?;
        run(&matches)
    }

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_merge_command(path_to_data: PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("merged.tab");

        run_args(&[
            "cnvrs",
            "merge",
            "--input-1",
            path_to_data.join("cnvnator/sample.bin500.tab").to_str().unwrap(),
            "--input-2",
            path_to_data.join("cnvnator/sample.bin1000.tab").to_str().unwrap(),
            "--sample",
            "x1156",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(
            read_to_string(&output).unwrap(),
            "x1156\tIV\t10000\t17000\tdeletion\t0.4\nx1156\tI\t12000\t12000\tduplication\t3.25\n"
        );
    }

    #[rstest]
    fn test_merge_command_gz_output(path_to_data: PathBuf) {
        use cnvrs_core::utils::get_dynamic_reader;
        use std::io::BufRead;

        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("merged.tab.gz");

        run_args(&[
            "cnvrs",
            "merge",
            "--input-1",
            path_to_data.join("cnvnator/sample.bin500.tab").to_str().unwrap(),
            "--input-2",
            path_to_data.join("cnvnator/sample.bin1000.tab").to_str().unwrap(),
            "--sample",
            "x1156",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let lines: Vec<String> = get_dynamic_reader(&output)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                "x1156\tIV\t10000\t17000\tdeletion\t0.4",
                "x1156\tI\t12000\t12000\tduplication\t3.25",
            ]
        );
    }

    #[rstest]
    fn test_merge_rejects_bad_threshold(path_to_data: PathBuf) {
        let input = path_to_data.join("cnvnator/sample.bin500.tab");
        let result = run_args(&[
            "cnvrs",
            "merge",
            "--input-1",
            input.to_str().unwrap(),
            "--input-2",
            input.to_str().unwrap(),
            "--sample",
            "s",
            "--threshold",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_merge_reports_malformed_input(path_to_data: PathBuf) {
        let bad = path_to_data.join("cnvnator/bad_field_count.tab");
        let good = path_to_data.join("cnvnator/sample.bin500.tab");
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("merged.tab");

        let err = run_args(&[
            "cnvrs",
            "merge",
            "--input-1",
            good.to_str().unwrap(),
            "--input-2",
            bad.to_str().unwrap(),
            "--sample",
            "s",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("bad_field_count.tab"));
        assert!(message.contains("line 1"));
    }

    #[rstest]
    fn test_windows_command(path_to_data: PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("overlap.txt");

        run_args(&[
            "cnvrs",
            "windows",
            "--cnvs",
            path_to_data.join("merged/all.tab").to_str().unwrap(),
            "--bed",
            path_to_data.join("windows/windows.bed").to_str().unwrap(),
            "--chromosomes",
            "XV,Mito",
            "--samples",
            "B,A",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(
            read_to_string(&output).unwrap(),
            "\t\t\tB\tA\nXV\t1\t15000\t\t0.0649642\nMito\t1\t1000\t2.0\t\n"
        );
    }

    #[rstest]
    fn test_windows_with_config(path_to_data: PathBuf) {
        // reconcile.toml asks for chromosome IV, which has no windows
        let result = run_args(&[
            "cnvrs",
            "windows",
            "--cnvs",
            path_to_data.join("merged/all.tab").to_str().unwrap(),
            "--bed",
            path_to_data.join("windows/windows.bed").to_str().unwrap(),
            "--config",
            path_to_data.join("config/reconcile.toml").to_str().unwrap(),
        ]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_dropzero_command(path_to_data: PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("nonzero.bed");

        run_args(&[
            "cnvrs",
            "dropzero",
            "--input",
            path_to_data.join("coverage/coverage.bed").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(
            read_to_string(&output).unwrap(),
            "I\t100\t200\tgeneB\t12.5000000\nII\t50\t90\tgeneD\t3.0000000\n"
        );
    }
}
