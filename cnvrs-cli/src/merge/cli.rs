use clap::{Arg, ArgAction, Command, value_parser};

pub const MERGE_CMD: &str = "merge";

pub fn create_merge_cli() -> Command {
    Command::new(MERGE_CMD)
        .about("Merge two CNVnator call sets of one sample (e.g. 500 bp and 1000 bp bins) into their overlapping calls.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input-1")
                .long("input-1")
                .required(true)
                .help("CNVnator calls obtained with the first bin size ('-' for stdin)"),
        )
        .arg(
            Arg::new("input-2")
                .long("input-2")
                .required(true)
                .help("CNVnator calls obtained with the second bin size"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .required(true)
                .help("Sample name written in the first output column"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_parser(value_parser!(f64))
                .help("Keep calls with eval1 strictly below this value [default: 0.05]"),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .help("Record layout of the inputs: 'locus' (CNVnator) or 'columns' [default: locus]"),
        )
        .arg(
            Arg::new("keep-chr-prefix")
                .long("keep-chr-prefix")
                .action(ArgAction::SetTrue)
                .help("Keep contig names as written instead of reducing them to the part after 'chr'"),
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
