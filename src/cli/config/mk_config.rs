use clap::ArgMatches;

use crate::mod_base::ModBase;

use super::{
    super::{ThresholdType, ValidationError, parse_threshold},
    Config,
};

impl Config {
    /// Build the configuration from parsed matches, stopping at the first invalid value
    pub fn from_matches(m: &ArgMatches) -> Result<Self, ValidationError> {
        let thresholds = [
            get_threshold(m, ThresholdType::Canonical)?,
            get_threshold(m, ThresholdType::Modified)?,
        ];

        let mod_base = match m.get_one::<String>("mod_base") {
            Some(s) => ModBase::from_abbrev(s)
                .ok_or_else(|| ValidationError::UnknownModifiedBase(s.to_owned()))?,
            None => ModBase::default(),
        };

        let region = m.get_one::<String>("region").map(|s| Box::from(s.as_str()));
        let read_group = m
            .get_one::<String>("read_group")
            .map(|s| Box::from(s.as_str()));
        let cpg_only = m.get_flag("cpg");
        let extended_output = m.get_flag("extended");

        let threads = m
            .get_one::<String>("threads")
            .map(|s| parse_threads(s))
            .transpose()?
            .unwrap_or(1);

        let input: Vec<_> = m
            .get_many::<String>("input")
            .map(|v| v.map(|s| s.as_str()).collect())
            .unwrap_or_default();

        let (alignment_path, reference_path) = match input.as_slice() {
            [a, b] => (check_path(a, "alignment")?, check_path(b, "reference")?),
            // Parsing stops at the third positional
            _ => return Err(ValidationError::PositionalArityError(input.len().min(3))),
        };

        if cpg_only && !mod_base.is_cytosine() {
            return Err(ValidationError::IncompatibleCpgFilter(
                mod_base.abbrev().to_owned(),
            ));
        }

        Ok(Config {
            alignment_path,
            reference_path,
            region,
            read_group,
            mod_base,
            thresholds,
            threads,
            cpg_only,
            extended_output,
        })
    }
}

fn get_threshold(m: &ArgMatches, t: ThresholdType) -> Result<u8, ValidationError> {
    match m.get_one::<String>(t.arg_name()) {
        Some(s) => parse_threshold(s),
        None => Ok(t.default_threshold()),
    }
}

fn parse_threads(s: &str) -> Result<usize, ValidationError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidThreadCount(s.to_owned())),
    }
}

fn check_path(s: &str, desc: &'static str) -> Result<Box<str>, ValidationError> {
    if s.is_empty() {
        Err(ValidationError::EmptyPath(desc))
    } else {
        Ok(Box::from(s))
    }
}
