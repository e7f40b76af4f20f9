use clap::{Arg, ArgAction, Command, command, value_parser};

use crate::{log_utils::LogLevel, mod_base::ModBase};

const AFTER_HELP: &str = "Positions absent from the methylation tags are assumed to be canonical. \
Positions with modified probability between upper and lower thresholds are removed from the \
counting process. Column 5 (\"score\") of the output is calculated as the proportion of bases \
called as the canonical or modified reference base with respect to the number of spanning \
reads, scaled to a maximum of 1000. Column 11 is the percentage of reference base calls \
identified as being modified.";

pub(super) fn cli_model() -> Command {
    command!()
    .args_override_self(true)
    .after_help(AFTER_HELP)
    .arg(
        Arg::new("canon_threshold")
            .short('a')
            .long("canon_threshold")
            .visible_alias("canon-threshold")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(String))
            .value_name("CANON_THRESHOLD")
            .help("Bases with mod. probability < CANON_THRESHOLD are counted as canonical [default: 0.33]"),
    )
    .arg(
        Arg::new("mod_threshold")
            .short('b')
            .long("mod_threshold")
            .visible_alias("mod-threshold")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(String))
            .value_name("MOD_THRESHOLD")
            .help("Bases with mod. probability > MOD_THRESHOLD are counted as modified [default: 0.66]"),
    )
    .arg(
        Arg::new("mod_base")
            .short('m')
            .long("mod_base")
            .visible_alias("mod-base")
            .value_parser(value_parser!(String))
            .value_name("MODIFIED_BASE")
            .help(format!(
                "Modified base of interest, one of: {} [default: {}]",
                ModBase::abbrev_list(),
                ModBase::default()
            )),
    )
    .arg(
        Arg::new("cpg")
            .short('c')
            .long("cpg")
            .action(ArgAction::SetTrue)
            .help("Output records filtered to CpG sites"),
    )
    .next_help_heading("Operation")
    .arg(
        Arg::new("region")
            .short('r')
            .long("region")
            .value_parser(value_parser!(String))
            .value_name("chr:start-end")
            .help("Genomic region to process"),
    )
    .arg(
        Arg::new("read_group")
            .short('g')
            .long("read_group")
            .visible_alias("read-group")
            .value_parser(value_parser!(String))
            .value_name("READ_GROUP")
            .help("Only process reads from given read group"),
    )
    .arg(
        Arg::new("threads")
            .short('t')
            .long("threads")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(String))
            .default_value("1")
            .value_name("THREADS")
            .help("Number of threads for BAM processing"),
    )
    .next_help_heading("Input/Output")
    .arg(
        Arg::new("extended")
            .short('e')
            .long("extended")
            .action(ArgAction::SetTrue)
            .help("Output extended bedMethyl including counts of canonical, modified, and filtered bases (in that order)"),
    )
    .arg(
        Arg::new("loglevel")
            .short('l')
            .long("loglevel")
            .value_name("LOGLEVEL")
            .value_parser(value_parser!(LogLevel))
            .ignore_case(true)
            .default_value("info")
            .help("Set log level"),
    )
    .arg(
        Arg::new("input")
            .value_parser(value_parser!(String))
            .num_args(1..)
            .action(ArgAction::Append)
            .value_name("FILE")
            .help("Input alignment file (SAM/BAM/CRAM) followed by reference FASTA file"),
    )
}
