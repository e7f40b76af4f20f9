use std::ffi::OsString;

use clap::ArgMatches;

use crate::log_utils::init_log;

mod cli_model;
mod config;
mod error;
mod threshold;

pub use config::Config;
pub use error::ValidationError;
pub use threshold::{ThresholdType, parse_threshold};

fn get_matches<I, T>(args: I) -> Result<ArgMatches, ValidationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    cli_model::cli_model()
        .try_get_matches_from(args)
        .map_err(ValidationError::from_clap)
}

/// Resolve command line arguments (not including the program name) into a [`Config`]
pub fn resolve<I, T>(args: I) -> Result<Config, ValidationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from(env!("CARGO_PKG_NAME")))
        .chain(args.into_iter().map(Into::into));
    let m = get_matches(argv)?;
    Config::from_matches(&m)
}

/// Read the process command line, set up logging and return the resolved configuration
pub fn handle_cli() -> anyhow::Result<Config> {
    let m = match get_matches(std::env::args_os()) {
        Ok(m) => m,
        // Lets clap handle --help and --version, and format its own usage errors
        Err(ValidationError::Usage(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };
    init_log(&m)?;
    let cfg = Config::from_matches(&m)?;

    debug!(
        "Alignment file: {}, reference file: {}",
        cfg.alignment_path(),
        cfg.reference_path()
    );
    debug!(
        "Modified base: {} ({}, reference base {}, code {})",
        cfg.mod_base(),
        cfg.mod_base().name(),
        cfg.mod_base().base() as char,
        cfg.mod_base().code() as char
    );
    debug!(
        "Thresholds: canonical < {}, modified > {}",
        cfg.low_threshold(),
        cfg.high_threshold()
    );
    if cfg.low_threshold() > cfg.high_threshold() {
        warn!(
            "Canonical threshold ({}) is above modified threshold ({})",
            cfg.low_threshold(),
            cfg.high_threshold()
        );
    }
    if let Some(r) = cfg.region() {
        debug!("Region: {}", r)
    }
    if let Some(g) = cfg.read_group() {
        debug!("Read group: {}", g)
    }
    debug!(
        "CpG only: {}, extended output: {}, threads: {}",
        cfg.cpg_only(),
        cfg.extended_output(),
        cfg.threads()
    );
    Ok(cfg)
}
