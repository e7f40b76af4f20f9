#[macro_use]
extern crate log;

pub mod cli;
pub mod log_utils;
pub mod mod_base;
