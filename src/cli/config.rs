use crate::mod_base::ModBase;

mod getters;
mod mk_config;

/// Resolved options, fixed for the rest of the run once built
#[derive(Debug, Clone)]
pub struct Config {
    alignment_path: Box<str>,
    reference_path: Box<str>,
    region: Option<Box<str>>,
    read_group: Option<Box<str>>,
    mod_base: ModBase,
    thresholds: [u8; 2],
    threads: usize,
    cpg_only: bool,
    extended_output: bool,
}
