use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

use crate::mod_base::ModBase;

/// Reasons the command line could not be turned into a [`Config`](super::Config)
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unrecognized option '{0}'")]
    UnrecognizedOption(String),
    #[error("Threshold parameter must be in (0,1), got {0}")]
    ThresholdOutOfRange(String),
    #[error(
        "Unrecognised modified base type: '{}' (expected one of: {})",
        .0,
        ModBase::abbrev_list()
    )]
    UnknownModifiedBase(String),
    #[error("{}", arity_msg(.0))]
    PositionalArityError(usize),
    #[error("Option '--cpg' can only be used with cytosine modifications (got {0})")]
    IncompatibleCpgFilter(String),
    #[error("Number of threads must be a positive integer, got {0}")]
    InvalidThreadCount(String),
    #[error("Empty {0} file path")]
    EmptyPath(&'static str),
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

fn arity_msg(n: &usize) -> String {
    let n = *n;
    let s = if n < 2 {
        "Too few arguments"
    } else {
        "Too many arguments"
    };
    format!(
        "{}: expected <alignment file> <reference file>, found {} positional argument{}",
        s,
        n,
        if n == 1 { "" } else { "s" }
    )
}

impl ValidationError {
    /// Map clap parsing errors onto our own kinds where possible
    pub(super) fn from_clap(e: clap::Error) -> Self {
        let unknown = match (e.kind(), e.get(ContextKind::InvalidArg)) {
            (ErrorKind::UnknownArgument, Some(ContextValue::String(s))) => Some(s.to_owned()),
            _ => None,
        };
        match unknown {
            Some(s) => Self::UnrecognizedOption(s),
            None => Self::Usage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_messages() {
        let s = format!("{}", ValidationError::PositionalArityError(0));
        assert!(s.starts_with("Too few arguments"));
        assert!(s.ends_with("found 0 positional arguments"));
        let s = format!("{}", ValidationError::PositionalArityError(1));
        assert!(s.ends_with("found 1 positional argument"));
        let s = format!("{}", ValidationError::PositionalArityError(3));
        assert!(s.starts_with("Too many arguments"));
    }

    #[test]
    fn messages_name_the_input() {
        let e = ValidationError::ThresholdOutOfRange("1.5".to_owned());
        assert!(format!("{}", e).contains("1.5"));
        let e = ValidationError::IncompatibleCpgFilter("6mA".to_owned());
        assert!(format!("{}", e).contains("6mA"));
    }
}
