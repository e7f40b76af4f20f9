use std::fmt;

use clap::{ArgMatches, ValueEnum, builder::PossibleValue};

/// LogLevel
///
/// Minimum level of messages that will be logged (`None` turns logging off)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error = 0,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::None,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::None => "none",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Verbosity as understood by stderrlog
    pub fn verbosity(&self) -> usize {
        if self.is_none() { 0 } else { *self as usize }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Initialize logging from command line arguments
pub fn init_log(m: &ArgMatches) -> anyhow::Result<()> {
    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .unwrap_or(LogLevel::Info);

    stderrlog::new()
        .quiet(level.is_none())
        .verbosity(level.verbosity())
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_levels() {
        assert_eq!(LogLevel::from_str("debug", true), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("WARN", true), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("none", false), Ok(LogLevel::None));
        assert!(LogLevel::from_str("loud", true).is_err());
    }

    #[test]
    fn verbosity() {
        assert_eq!(LogLevel::Error.verbosity(), 0);
        assert_eq!(LogLevel::Info.verbosity(), 2);
        assert_eq!(LogLevel::Trace.verbosity(), 4);
        assert_eq!(LogLevel::None.verbosity(), 0);
        assert!(LogLevel::None.is_none());
        assert_eq!(format!("{}", LogLevel::Debug), "debug");
    }
}
