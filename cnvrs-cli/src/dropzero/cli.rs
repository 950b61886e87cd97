use clap::{Arg, Command};

pub const DROPZERO_CMD: &str = "dropzero";

pub fn create_dropzero_cli() -> Command {
    Command::new(DROPZERO_CMD)
        .about("Remove zero-coverage rows from a five column coverage BED file.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .long("input")
                .required(true)
                .help("Coverage BED (chrom, start, end, feature, coverage); '-' for stdin"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output file (default: stdout)"),
        )
}
