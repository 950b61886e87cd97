use clap::{Arg, Command, value_parser};

pub const WINDOWS_CMD: &str = "windows";

pub fn create_windows_cli() -> Command {
    Command::new(WINDOWS_CMD)
        .about("Assign merged CNV calls of many samples to reference windows, one column per sample.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("cnvs")
                .long("cnvs")
                .required(true)
                .help("Concatenated output of `merge` for all samples"),
        )
        .arg(
            Arg::new("bed")
                .long("bed")
                .required(true)
                .help("Reference windows (chrom, start, end), sorted per chromosome"),
        )
        .arg(
            Arg::new("chromosomes")
                .long("chromosomes")
                .value_delimiter(',')
                .num_args(1..)
                .help("Chromosomes to report, in order [default: I..XVI,Mito]"),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .value_delimiter(',')
                .num_args(1..)
                .help("Sample columns, in order [default: order of first appearance]"),
        )
        .arg(
            Arg::new("digits")
                .long("digits")
                .value_parser(value_parser!(u32))
                .help("Decimal places of a mean over several calls [default: 3]"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with reconciliation settings"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output file (default: stdout)"),
        )
}
